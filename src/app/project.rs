use leptos::{html, prelude::*};

use super::motion::use_entrance;
use super::ui::{Button, Card, CardContent};
use crate::content::Cta;
use crate::style::{reveal_class, ButtonSize, ButtonVariant, Reveal};

#[component]
pub fn ProjectCard(
    title: &'static str,
    stack: &'static str,
    bullets: &'static [&'static str],
    #[prop(default = None)] cta: Option<Cta>,
) -> impl IntoView {
    debug_assert!(!bullets.is_empty(), "project {title} has no bullets");
    let card_ref = NodeRef::<html::Div>::new();
    let entered = use_entrance(card_ref);

    view! {
        <div node_ref=card_ref class=move || reveal_class(Reveal::Card, entered.get())>
            <Card class="rounded-2xl shadow-sm hover:shadow-md transition-shadow">
                <CardContent class="p-6">
                    <div class="flex items-start justify-between gap-6">
                        <div>
                            <h3 class="text-xl font-semibold">{title}</h3>
                            <p class="text-sm text-muted-foreground mt-1">{stack}</p>
                        </div>
                        {cta
                            .map(|cta| {
                                let class = if cta.is_placeholder() {
                                    "gap-1 cta-placeholder"
                                } else {
                                    "gap-1"
                                };
                                view! {
                                    <Button
                                        size=ButtonSize::Sm
                                        variant=ButtonVariant::Secondary
                                        class
                                        link=cta.link()
                                    >
                                        "View "
                                        <span class="h-4 w-4" aria-hidden="true">
                                            "↗"
                                        </span>
                                    </Button>
                                }
                            })}
                    </div>
                    <ul class="mt-4 space-y-2 text-sm leading-6">
                        {bullets
                            .iter()
                            .map(|bullet| {
                                view! {
                                    <li class="flex gap-2">
                                        <span class="project-bullet mt-2 h-1.5 w-1.5 rounded-full bg-foreground/70 shrink-0" />
                                        <span>{*bullet}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </CardContent>
            </Card>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::render;

    const BULLETS: &[&str] = &["first point", "second point", "third point"];

    #[test]
    fn test_bullets_in_order() {
        let html = render(|| {
            view! { <ProjectCard title="Example" stack="SQL • Excel" bullets=BULLETS /> }
        });
        assert_eq!(html.matches("project-bullet").count(), BULLETS.len());
        assert_eq!(html.matches("<li").count(), BULLETS.len());
        let first = html.find("first point").unwrap();
        let second = html.find("second point").unwrap();
        let third = html.find("third point").unwrap();
        assert!(first < second && second < third);
        assert!(html.contains("SQL • Excel"));
    }

    #[test]
    fn test_cta_only_when_present() {
        let html = render(|| {
            view! { <ProjectCard title="Example" stack="SQL" bullets=BULLETS /> }
        });
        assert!(!html.contains("<a"));
        assert!(!html.contains("<button"));

        let html = render(|| {
            let cta = Some(Cta {
                href: "https://github.com/example/repo",
            });
            view! { <ProjectCard title="Example" stack="SQL" bullets=BULLETS cta /> }
        });
        assert_eq!(html.matches("<button").count(), 1);
        assert!(!html.contains("cta-placeholder"));
        assert!(html.contains("href=\"https://github.com/example/repo\""));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("View"));
    }

    #[test]
    fn test_placeholder_cta_marked() {
        let html = render(|| {
            let cta = Some(Cta::PLACEHOLDER);
            view! { <ProjectCard title="Example" stack="SQL" bullets=BULLETS cta /> }
        });
        assert!(html.contains("href=\"#\""));
        assert_eq!(html.matches("cta-placeholder").count(), 1);
    }

    #[test]
    fn test_starts_hidden_before_entrance() {
        let html = render(|| {
            view! { <ProjectCard title="Example" stack="SQL" bullets=BULLETS /> }
        });
        assert!(html.contains(&reveal_class(Reveal::Card, false)));
    }
}
