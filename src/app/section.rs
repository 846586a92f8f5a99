use leptos::prelude::*;

/// Centered heading block. The subtitle line exists only when a subtitle is given.
#[component]
pub fn SectionTitle(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto text-center mb-10">
            <h2 class="text-3xl md:text-4xl font-semibold tracking-tight">{title}</h2>
            {subtitle
                .map(|subtitle| {
                    view! {
                        <p class="section-subtitle text-muted-foreground mt-2 text-base md:text-lg">
                            {subtitle}
                        </p>
                    }
                })}
        </div>
    }
}
