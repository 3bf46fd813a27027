//! Keeps the product sections, tab buttons, nav links, URL hash and document
//! title pointing at one selected product.

use log::debug;

use crate::catalog::{find_product, ProductRecord, CATALOG};
use crate::config;
use crate::contact::ContactForm;
use crate::navigation::{self, AnchorRoute, CONTACT_ANCHOR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    Push,
    Replace,
}

/// What caused a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    Tab,
    NavLink,
    Anchor,
    Load,
    /// Page load whose URL named no product; the first product is shown in place.
    Fallback,
    HashChange,
}

impl SelectionSource {
    /// Load and hash-change selections reflect a URL the browser already has,
    /// so they must not add another history entry.
    pub fn history_mode(self) -> HistoryMode {
        match self {
            SelectionSource::Tab | SelectionSource::NavLink | SelectionSource::Anchor => HistoryMode::Push,
            SelectionSource::Load | SelectionSource::Fallback | SelectionSource::HashChange => {
                HistoryMode::Replace
            }
        }
    }

    /// The default product on a bare page load stays put under the hero.
    pub fn scrolls(self) -> bool {
        self != SelectionSource::Fallback
    }
}

/// The surfaces a selection has to update.
pub trait ViewBinding {
    /// Marks the section, tab button and nav link of `product_id` active and every other one inactive.
    fn activate(&mut self, product_id: &'static str);
    fn set_title(&mut self, title: &str);
    fn set_hash(&mut self, hash: &str, mode: HistoryMode);
    fn scroll_to(&mut self, element_id: &str);
    fn reveal_install_guide(&mut self, product_id: &'static str, delay_ms: u32);
}

pub fn page_title(product: &ProductRecord) -> String {
    format!("{} | {}", product.name, config::BRAND_NAME)
}

#[derive(Debug, Clone)]
pub struct SiteState {
    catalog: &'static [ProductRecord],
    current: Option<&'static ProductRecord>,
}

impl Default for SiteState {
    fn default() -> Self {
        Self::new(CATALOG)
    }
}

impl SiteState {
    pub fn new(catalog: &'static [ProductRecord]) -> Self {
        Self { catalog, current: None }
    }

    pub fn current_product_id(&self) -> Option<&'static str> {
        self.current.map(|product| product.id)
    }

    /// Selects `product_id` and updates every surface. Ids outside the catalog
    /// are ignored without touching state or view.
    pub fn select_product<V: ViewBinding>(
        &mut self,
        product_id: &str,
        source: SelectionSource,
        view: &mut V,
    ) -> Option<&'static ProductRecord> {
        let Some(product) = find_product(self.catalog, product_id) else {
            debug!("Ignoring selection of unknown product {:?} ({:?})", product_id, source);
            return None;
        };

        debug!("Selecting product {} ({:?})", product.id, source);
        self.current = Some(product);

        view.activate(product.id);
        view.set_hash(&navigation::hash_for(product.id), source.history_mode());
        view.set_title(&page_title(product));
        if product.has_install_guide() {
            view.reveal_install_guide(product.id, config::INSTALL_GUIDE_REVEAL_DELAY_MS);
        }
        if source.scrolls() {
            view.scroll_to(&navigation::section_element_id(product.id));
        }

        Some(product)
    }

    /// Page load: the hash wins if it names a product, otherwise the first catalog entry.
    pub fn initialize<V: ViewBinding>(&mut self, hash: &str, view: &mut V) -> Option<&'static ProductRecord> {
        let product = navigation::initial_product(self.catalog, hash)?;
        let named = navigation::fragment_id(hash)
            .and_then(|target| navigation::product_for_target(self.catalog, target))
            .is_some();
        let source = if named { SelectionSource::Load } else { SelectionSource::Fallback };
        self.select_product(product.id, source, view)
    }

    /// Accepts the same fragments as page load, `#payroll` as well as `#payroll-section`.
    pub fn handle_hash_change<V: ViewBinding>(&mut self, hash: &str, view: &mut V) -> Option<&'static ProductRecord> {
        let target = navigation::fragment_id(hash)?;
        let product = navigation::product_for_target(self.catalog, target)?;
        self.select_product(product.id, SelectionSource::HashChange, view)
    }

    /// Routes an in-page anchor click. Returns `false` for anchors that should be ignored.
    pub fn follow_anchor<V: ViewBinding>(&mut self, href: &str, view: &mut V) -> bool {
        match navigation::route_anchor(self.catalog, href) {
            AnchorRoute::Ignore => false,
            AnchorRoute::Product { product_id, target } => {
                self.select_product(product_id, SelectionSource::Anchor, view);
                view.scroll_to(&target);
                true
            }
            AnchorRoute::Scroll(target) => {
                view.scroll_to(&target);
                true
            }
        }
    }

    /// "Learn More" on a product: preselect it as the form's interest and bring the form into view.
    pub fn learn_more<V: ViewBinding>(&self, product_id: &str, form: &mut ContactForm, view: &mut V) -> bool {
        let Some(product) = find_product(self.catalog, product_id) else {
            return false;
        };
        form.prefill_interest(product.id);
        view.scroll_to(CONTACT_ANCHOR);
        true
    }
}
