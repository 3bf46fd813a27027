use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::catalog::ProductRecord;
use crate::contact::{handle_submit, ContactForm, CONFIRMATION_MESSAGE};
use crate::navigation::CONTACT_ANCHOR;
use crate::reveal::use_scroll_reveal;

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub catalog: &'static [ProductRecord],
    pub form: UseStateHandle<ContactForm>,
}

/// Value the interest `<select>` should show: the chosen product, or the placeholder.
pub fn interest_select_value<'a>(catalog: &[ProductRecord], interest: &'a str) -> &'a str {
    if catalog.iter().any(|product| product.id == interest) {
        interest
    } else {
        ""
    }
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let form = props.form.clone();
    let status = use_state(|| None::<Result<String, String>>);
    let content_ref = use_node_ref();
    let content_visible = use_scroll_reveal(content_ref.clone());
    let interest_ref = use_node_ref();

    // Once the user has picked an option, `selected` attributes no longer move the dropdown.
    {
        let interest_ref = interest_ref.clone();
        let catalog = props.catalog;
        use_effect_with_deps(
            move |interest: &String| {
                if let Some(select) = interest_ref.cast::<HtmlSelectElement>() {
                    select.set_value(interest_select_value(catalog, interest));
                }
                || ()
            },
            form.interest.clone(),
        );
    }

    let on_name_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.name = input.value();
            form.set(next);
        })
    };

    let on_email_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.email = input.value();
            form.set(next);
        })
    };

    let on_interest_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.interest = select.value();
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            match handle_submit(&mut next) {
                Ok(_) => {
                    form.set(next);
                    status.set(Some(Ok(CONFIRMATION_MESSAGE.to_string())));
                }
                Err(err) => {
                    status.set(Some(Err(err.to_string())));
                }
            }
        })
    };

    html! {
        <section id={CONTACT_ANCHOR} class="contact">
            <div ref={content_ref} class={classes!("contact-content", "reveal", content_visible.then(|| "visible"))}>
                <h2>{"Get in Touch"}</h2>
                <p>{"Tell us what you are looking for and our team will reach out."}</p>
                {
                    match &*status {
                        Some(Ok(message)) => html! { <div class="success-message">{message}</div> },
                        Some(Err(message)) => html! { <div class="error-message">{message}</div> },
                        None => html! {},
                    }
                }
                <form id="contactForm" {onsubmit}>
                    <div class="form-group">
                        <label for="name">{"Name"}</label>
                        <input
                            type="text"
                            id="name"
                            name="name"
                            value={form.name.clone()}
                            oninput={on_name_input}
                        />
                    </div>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="text"
                            inputmode="email"
                            autocomplete="email"
                            id="email"
                            name="email"
                            value={form.email.clone()}
                            oninput={on_email_input}
                        />
                    </div>
                    <div class="form-group">
                        <label for="interest">{"Interested in"}</label>
                        <select ref={interest_ref} id="interest" name="interest" onchange={on_interest_change}>
                            <option value="" selected={form.interest.is_empty()}>{"Select a product"}</option>
                            {
                                for props.catalog.iter().map(|product| html! {
                                    <option value={product.id} selected={form.interest == product.id}>
                                        {product.name}
                                    </option>
                                })
                            }
                        </select>
                    </div>
                    <button type="submit" class="btn primary">{"Send"}</button>
                </form>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;

    #[test]
    fn select_follows_prefill_over_a_manual_choice() {
        let mut form = ContactForm {
            interest: "lgu".to_string(),
            ..ContactForm::default()
        };
        assert_eq!(interest_select_value(CATALOG, &form.interest), "lgu");

        form.prefill_interest("payroll");
        assert_eq!(interest_select_value(CATALOG, &form.interest), "payroll");
    }

    #[test]
    fn select_returns_to_placeholder_after_submit() {
        let mut form = ContactForm {
            name: "A".to_string(),
            email: "b@c.com".to_string(),
            interest: "accounting".to_string(),
        };
        assert!(handle_submit(&mut form).is_ok());
        assert_eq!(interest_select_value(CATALOG, &form.interest), "");
    }

    #[test]
    fn unknown_interest_shows_placeholder() {
        assert_eq!(interest_select_value(CATALOG, "crm"), "");
    }
}
