use leptos::{either::Either, ev::MouseEvent, prelude::*};

use crate::content::LinkTarget;
use crate::style::{button_class, card_class, ButtonSize, ButtonVariant};

/// A styled `<button>`, optionally wrapped in a link.
///
/// The class list is the variant ruleset, then the size ruleset, then `class`.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] link: Option<LinkTarget>,
    #[prop(optional, into)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let button = view! {
        <button
            type="button"
            class=button_class(variant, size, class)
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.run(ev);
                }
            }
        >
            {children()}
        </button>
    };
    match link {
        Some(link) => Either::Left(view! {
            <a href=link.href target=link.target() rel=link.rel()>
                {button}
            </a>
        }),
        None => Either::Right(button),
    }
}

#[component]
pub fn Card(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! { <div class=card_class(class)>{children()}</div> }
}

#[component]
pub fn CardContent(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! { <div class=class>{children()}</div> }
}
