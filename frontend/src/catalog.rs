/// One step of a product's installation guide.
#[derive(Debug, Clone, PartialEq)]
pub struct InstallStep {
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub overview: &'static str,
    pub features: &'static [&'static str],
    pub color: Option<&'static str>,
    pub install_steps: &'static [InstallStep],
}

impl ProductRecord {
    pub fn has_install_guide(&self) -> bool {
        !self.install_steps.is_empty()
    }
}

pub const CATALOG: &[ProductRecord] = &[
    ProductRecord {
        id: "lgu",
        name: "LGU Management System",
        description: "Comprehensive local government unit management solution designed for municipal and provincial operations.",
        overview: "Streamline administrative processes, manage citizen services, and improve operational efficiency with our integrated LGU platform. Built specifically for government entities with compliance features and secure data management.",
        features: &[
            "Citizen Management",
            "Permit & License Processing",
            "Revenue Management",
            "Reporting & Analytics",
        ],
        color: Some("#1E90FF"),
        install_steps: &[
            InstallStep {
                title: "Request an instance",
                detail: "Send us your municipality or province name and we provision a dedicated environment.",
            },
            InstallStep {
                title: "Import your registry",
                detail: "Upload citizen and business records from spreadsheets or your current system.",
            },
            InstallStep {
                title: "Configure offices",
                detail: "Set up departments, signatories and permit workflows for each office.",
            },
        ],
    },
    ProductRecord {
        id: "accounting",
        name: "Accounting & Financial System",
        description: "Complete accounting and financial management system for enterprises of all sizes.",
        overview: "Manage your finances with precision. Our accounting system provides real-time financial reporting, automated workflows, and compliance with accounting standards. Perfect for CFOs and finance teams managing complex operations.",
        features: &[
            "General Ledger",
            "Accounts Payable/Receivable",
            "Financial Reporting",
            "Budget Management",
        ],
        color: Some("#34D399"),
        install_steps: &[],
    },
    ProductRecord {
        id: "payroll",
        name: "Payroll Management System",
        description: "Automated payroll processing and employee compensation management.",
        overview: "Simplify payroll operations with automated calculation, tax compliance, and employee self-service. Our system handles complex payroll scenarios while maintaining security and accuracy for your workforce.",
        features: &[
            "Salary Processing",
            "Tax Compliance",
            "Leave Management",
            "Employee Portal",
        ],
        color: None,
        install_steps: &[
            InstallStep {
                title: "Add your company",
                detail: "Register the employer profile with tax identification numbers and pay schedules.",
            },
            InstallStep {
                title: "Load employees",
                detail: "Import employee records, salary grades and leave balances.",
            },
            InstallStep {
                title: "Run a test payroll",
                detail: "Process a dry run and compare payslips before going live.",
            },
        ],
    },
];

pub fn find_product(catalog: &'static [ProductRecord], id: &str) -> Option<&'static ProductRecord> {
    catalog.iter().find(|product| product.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique() {
        let ids: HashSet<_> = CATALOG.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn catalog_keeps_declared_order() {
        let ids: Vec<_> = CATALOG.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["lgu", "accounting", "payroll"]);
    }

    #[test]
    fn find_product_matches_exact_id_only() {
        assert_eq!(find_product(CATALOG, "payroll").map(|p| p.name), Some("Payroll Management System"));
        assert!(find_product(CATALOG, "Payroll").is_none());
        assert!(find_product(CATALOG, " payroll").is_none());
        assert!(find_product(CATALOG, "").is_none());
    }

    #[test]
    fn accounting_has_no_install_guide() {
        let accounting = find_product(CATALOG, "accounting").unwrap();
        assert!(!accounting.has_install_guide());
        assert!(find_product(CATALOG, "lgu").unwrap().has_install_guide());
    }
}
