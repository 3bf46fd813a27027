use log::{debug, info};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::browser::{current_hash, BrowserView};
use crate::catalog::{ProductRecord, CATALOG};
use crate::components::anchor_link::AnchorLink;
use crate::components::contact_form::ContactSection;
use crate::components::nav::Nav;
use crate::components::product_section::{ProductSection, ProductTabs};
use crate::config;
use crate::contact::ContactForm;
use crate::navigation::{section_element_id, CONTACT_ANCHOR};
use crate::selection::{SelectionSource, SiteState};

#[function_component]
pub fn Home() -> Html {
    // Render never borrows `site`; only callbacks and effects do.
    let catalog: &'static [ProductRecord] = CATALOG;
    let site = use_mut_ref(|| SiteState::new(catalog));
    let active = use_state_eq(|| None::<&'static str>);
    let revealed_guide = use_state_eq(|| None::<&'static str>);
    let form = use_state(ContactForm::default);

    let view = {
        let active = active.clone();
        let revealed_guide = revealed_guide.clone();
        move || BrowserView::new(active.clone(), revealed_guide.clone())
    };

    // Initial selection: the hash wins, otherwise the first product
    {
        let site = site.clone();
        let view = view.clone();
        use_effect_with_deps(
            move |_| {
                let hash = current_hash();
                if let Some(product) = site.borrow_mut().initialize(&hash, &mut view()) {
                    info!("Initial product: {}", product.id);
                }
                || ()
            },
            (),
        );
    }

    // Back/forward and pasted links
    {
        let site = site.clone();
        let view = view.clone();
        use_event_with_window("hashchange", move |_: web_sys::HashChangeEvent| {
            let hash = current_hash();
            let mut site = site.borrow_mut();
            if site.handle_hash_change(&hash, &mut view()).is_none() {
                debug!("Hash {} names no product, keeping {:?}", hash, site.current_product_id());
            }
        });
    }

    let select = |source: SelectionSource| {
        let site = site.clone();
        let view = view.clone();
        Callback::from(move |product_id: &'static str| {
            site.borrow_mut().select_product(product_id, source, &mut view());
        })
    };

    let on_anchor = {
        let site = site.clone();
        let view = view.clone();
        Callback::from(move |href: String| {
            site.borrow_mut().follow_anchor(&href, &mut view());
        })
    };

    let on_learn_more = {
        let site = site.clone();
        let form = form.clone();
        let view = view.clone();
        Callback::from(move |product_id: &'static str| {
            let mut next = (*form).clone();
            if site.borrow().learn_more(product_id, &mut next, &mut view()) {
                form.set(next);
            }
        })
    };

    html! {
        <>
            <Nav
                catalog={catalog}
                active={*active}
                on_select={select(SelectionSource::NavLink)}
                on_anchor={on_anchor.clone()}
            />
            <div class="landing-page">
                <section class="hero">
                    <h1>{"Software That Runs Your Operations"}</h1>
                    <p class="hero-subtitle">
                        {"Government, finance and workforce systems built for the way your teams actually work."}
                    </p>
                    <div class="hero-actions">
                        <AnchorLink href="#products" class="hero-cta" on_follow={on_anchor.clone()}>
                            {"Explore Products"}
                        </AnchorLink>
                        <AnchorLink href={format!("#{}", CONTACT_ANCHOR)} class="hero-secondary" on_follow={on_anchor.clone()}>
                            {"Talk to Us"}
                        </AnchorLink>
                    </div>
                </section>

                <section id="products" class="products">
                    <h2>{"Our Products"}</h2>
                    <ProductTabs
                        catalog={catalog}
                        active={*active}
                        on_select={select(SelectionSource::Tab)}
                    />
                    <div class="tab-content">
                        {
                            for catalog.iter().map(|product| html! {
                                <ProductSection
                                    key={product.id}
                                    product={product}
                                    active={*active == Some(product.id)}
                                    guide_revealed={*revealed_guide == Some(product.id)}
                                    on_learn_more={on_learn_more.clone()}
                                />
                            })
                        }
                    </div>
                </section>

                <ContactSection catalog={catalog} form={form.clone()} />

                <footer class="footer-cta">
                    <div class="footer-content">
                        <div class="footer-links">
                            {
                                for catalog.iter().map(|product| html! {
                                    <AnchorLink
                                        href={format!("#{}", section_element_id(product.id))}
                                        on_follow={on_anchor.clone()}
                                    >
                                        {product.name}
                                    </AnchorLink>
                                })
                            }
                        </div>
                        <p class="disclaimer">{format!("© {}", config::BRAND_NAME)}</p>
                    </div>
                </footer>
            </div>
            <style>
                {r#"
                    .product-section {
                        display: none;
                    }
                    .product-section.active {
                        display: block;
                    }
                    .tab-btn.active,
                    .nav-link.active {
                        color: #fff;
                        border-bottom: 2px solid #1E90FF;
                    }
                    .reveal {
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                    }
                    .reveal.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .install-guide {
                        opacity: 0;
                        max-height: 0;
                        overflow: hidden;
                        transform: translateY(-10px);
                        transition: opacity 0.4s ease-out, transform 0.4s ease-out, max-height 0.4s ease-out;
                    }
                    .install-guide.visible {
                        opacity: 1;
                        max-height: 600px;
                        transform: translateY(0);
                    }
                    .success-message {
                        background-color: rgba(76, 175, 80, 0.1);
                        border: 1px solid rgba(76, 175, 80, 0.3);
                        border-radius: 8px;
                        padding: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .error-message {
                        background-color: rgba(255, 68, 68, 0.1);
                        border: 1px solid rgba(255, 68, 68, 0.3);
                        border-radius: 8px;
                        padding: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .top-nav.scrolled {
                        background: rgba(26, 26, 26, 0.95);
                        backdrop-filter: blur(10px);
                    }
                    @media (max-width: 768px) {
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
        </>
    }
}
