use yew::prelude::*;

use crate::catalog::ProductRecord;
use crate::navigation::section_element_id;
use crate::reveal::use_scroll_reveal;

#[derive(Properties, PartialEq)]
pub struct ProductTabsProps {
    pub catalog: &'static [ProductRecord],
    pub active: Option<&'static str>,
    pub on_select: Callback<&'static str>,
}

#[function_component(ProductTabs)]
pub fn product_tabs(props: &ProductTabsProps) -> Html {
    html! {
        <div class="tab-buttons">
            {
                for props.catalog.iter().map(|product| {
                    let id = product.id;
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(id))
                    };
                    html! {
                        <button
                            class={classes!("tab-btn", (props.active == Some(id)).then(|| "active"))}
                            data-tab={id}
                            {onclick}
                        >
                            {product.name}
                        </button>
                    }
                })
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductSectionProps {
    pub product: &'static ProductRecord,
    pub active: bool,
    pub guide_revealed: bool,
    pub on_learn_more: Callback<&'static str>,
}

#[function_component(ProductSection)]
pub fn product_section(props: &ProductSectionProps) -> Html {
    let product = props.product;
    let details_ref = use_node_ref();
    let details_visible = use_scroll_reveal(details_ref.clone());

    let learn_more = {
        let on_learn_more = props.on_learn_more.clone();
        let id = product.id;
        Callback::from(move |_: MouseEvent| on_learn_more.emit(id))
    };

    let accent = product
        .color
        .map(|color| format!("border-top: 4px solid {};", color))
        .unwrap_or_default();

    html! {
        <section
            id={section_element_id(product.id)}
            class={classes!("product-section", props.active.then(|| "active"))}
            style={accent}
        >
            <div ref={details_ref} class={classes!("product-details", "reveal", details_visible.then(|| "visible"))}>
                <div class="product-info">
                    <h3>{product.name}</h3>
                    <p class="product-description">{product.description}</p>
                    <p class="product-overview">{product.overview}</p>
                    <h4>{"Key Features:"}</h4>
                    <ul class="features">
                        { for product.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                    </ul>
                    <button class="btn primary" onclick={learn_more}>{"Learn More"}</button>
                </div>
                <div class="product-image">
                    <div class="image-placeholder">{format!("{} Preview", product.name)}</div>
                </div>
            </div>
            if product.has_install_guide() {
                <div
                    id={format!("{}-install-guide", product.id)}
                    class={classes!("install-guide", props.guide_revealed.then(|| "visible"))}
                >
                    <h4>{"Getting Started"}</h4>
                    <ol>
                        {
                            for product.install_steps.iter().map(|step| html! {
                                <li>
                                    <strong>{step.title}</strong>
                                    <p>{step.detail}</p>
                                </li>
                            })
                        }
                    </ol>
                </div>
            }
        </section>
    }
}
