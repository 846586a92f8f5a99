use leptos::prelude::*;
use leptos_meta::Title;

use super::contact::ContactActions;
use super::footer::Footer;
use super::motion::use_mounted;
use super::project::ProjectCard;
use super::section::SectionTitle;
use super::ui::{Card, CardContent};
use crate::clock::SystemClock;
use crate::content::{
    CONTACT_SECTION, EXPERIENCE_SECTION, PREVIEW_TILES, PROFILE, PROJECTS, PROJECTS_SECTION,
    ROLE, SKILLS, SKILLS_SECTION,
};
use crate::style::{reveal_class, Reveal};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-background text-foreground">
            <Hero />
            <ProjectsSection />
            <ExperienceSection />
            <SkillsSection />
            <ContactSection />
            <Footer clock=SystemClock />
        </div>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let mounted = use_mounted();

    view! {
        <section class="relative overflow-hidden">
            <div class="max-w-6xl mx-auto px-4 pt-16 pb-8">
                <div class=move || {
                    format!(
                        "grid md:grid-cols-12 gap-8 items-center {}",
                        reveal_class(Reveal::Hero, mounted.get()),
                    )
                }>
                    <div class="md:col-span-7">
                        <div class="inline-flex items-center gap-2 rounded-full border px-3 py-1 text-xs md:text-sm bg-white">
                            <span class="h-4 w-4" aria-hidden="true">
                                "✦"
                            </span>
                            <span>{PROFILE.tagline}</span>
                        </div>
                        <h1 class="mt-4 text-4xl md:text-5xl font-bold tracking-tight">
                            {PROFILE.name}
                        </h1>
                        <p class="mt-4 text-muted-foreground max-w-xl">{PROFILE.summary}</p>
                        <ContactActions class="mt-6" />
                    </div>
                    <div class="md:col-span-5">
                        <SkillsPreview />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillsPreview() -> impl IntoView {
    view! {
        <Card class="rounded-2xl">
            <CardContent class="p-6 grid grid-cols-2 gap-4">
                {PREVIEW_TILES
                    .iter()
                    .map(|tile| {
                        view! {
                            <div class="preview-tile rounded-xl border p-4">
                                {tile
                                    .icon
                                    .map(|icon| {
                                        view! {
                                            <span class="text-2xl" aria-hidden="true">
                                                {icon}
                                            </span>
                                            <p class="mt-2 text-sm">{tile.label}</p>
                                        }
                                            .into_any()
                                    })
                                    .unwrap_or_else(|| {
                                        view! { <p class="font-medium">{tile.label}</p> }.into_any()
                                    })}
                                <p class="text-xs text-muted-foreground">{tile.detail}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </CardContent>
        </Card>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section class="py-12 md:py-16" id=PROJECTS_SECTION.id>
            <SectionTitle title=PROJECTS_SECTION.title subtitle=PROJECTS_SECTION.subtitle />
            <div class="max-w-5xl mx-auto px-4 grid md:grid-cols-2 gap-6">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <ProjectCard
                                title=project.title
                                stack=project.stack
                                bullets=project.bullets
                                cta=project.cta
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section class="py-12 md:py-16 bg-muted/30" id=EXPERIENCE_SECTION.id>
            <SectionTitle title=EXPERIENCE_SECTION.title subtitle=EXPERIENCE_SECTION.subtitle />
            <div class="max-w-4xl mx-auto px-4">
                <Card class="rounded-2xl">
                    <CardContent class="p-6 space-y-3">
                        <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-2">
                            <h3 class="text-lg font-semibold">{ROLE.title}</h3>
                            <p class="text-sm text-muted-foreground">{ROLE.date}</p>
                        </div>
                        <ul class="text-sm space-y-2">
                            {ROLE.bullets.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}
                        </ul>
                    </CardContent>
                </Card>
            </div>
        </section>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section class="py-12 md:py-16" id=SKILLS_SECTION.id>
            <SectionTitle title=SKILLS_SECTION.title subtitle=SKILLS_SECTION.subtitle />
            <div class="max-w-5xl mx-auto px-4 grid sm:grid-cols-2 md:grid-cols-3 gap-4">
                {SKILLS
                    .iter()
                    .map(|skill| {
                        view! {
                            <div class="skill-tile rounded-2xl border p-4 text-sm bg-white">
                                {skill.label}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section class="py-12 md:py-16 bg-muted/30" id=CONTACT_SECTION.id>
            <SectionTitle title=CONTACT_SECTION.title subtitle=CONTACT_SECTION.subtitle />
            <div class="max-w-4xl mx-auto px-4">
                <ContactActions />
            </div>
        </section>
    }
}
