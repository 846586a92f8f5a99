use leptos::prelude::*;

use super::ui::Button;
use crate::content::{ContactLink, CONTACTS};
use crate::style::merge_class;

/// The row of mail, phone and profile actions shown in the hero and contact sections.
#[component]
pub fn ContactActions(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <div class=merge_class("flex flex-wrap gap-3", class)>
            {CONTACTS.iter().map(|contact| view! { <ContactButton contact=*contact /> }).collect_view()}
        </div>
    }
}

#[component]
fn ContactButton(contact: ContactLink) -> impl IntoView {
    view! {
        <Button variant=contact.kind.button_variant() class="gap-2" link=contact.link()>
            <i class=format!("{} h-4 w-4", contact.icon) aria-hidden="true"></i>
            " "
            {contact.label}
        </Button>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::render;

    #[test]
    fn test_contact_targets_verbatim() {
        let html = render(|| view! { <ContactActions /> });
        for target in [
            "mailto:olanrewajutd@gmail.com",
            "tel:+447448113345",
            "https://www.linkedin.com/in/tobisucre",
            "https://github.com/Theblackgenius?tab=repositories",
        ] {
            assert!(html.contains(&format!("href=\"{target}\"")), "missing {target}");
        }
        assert_eq!(html.matches("<button").count(), 4);
        // only the two profile links open a new context
        assert_eq!(html.matches("target=\"_blank\"").count(), 2);
    }

    #[test]
    fn test_contact_labels() {
        let html = render(|| view! { <ContactActions /> });
        for label in ["Mail", "Mobile", "LinkedIn", "Github"] {
            assert!(html.contains(label));
        }
    }
}
