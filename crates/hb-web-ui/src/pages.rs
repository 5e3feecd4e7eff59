//! Page Components
//!
//! One component per view. All of them render the embedded content catalog;
//! only the contact page keeps local state.

use hb_core::content::Emphasis;
use hb_core::{ContactField, ContactPageState, Page, SiteContent};
use leptos::*;

use crate::components::*;
use crate::state::SiteNav;

/// Renders the view for the active page
#[component]
pub fn PageOutlet(nav: SiteNav) -> impl IntoView {
    let on_navigate = nav.navigate;

    // `nav.page` is a memo, so toggling the menu does not rebuild the page
    // (and does not wipe a half-filled contact form).
    move || match nav.page.get() {
        Page::Home => view! { <HomePage on_navigate=on_navigate/> }.into_view(),
        Page::About => view! { <AboutPage/> }.into_view(),
        Page::Work => view! { <WorkPage/> }.into_view(),
        Page::GetInvolved => view! { <GetInvolvedPage/> }.into_view(),
        Page::Contact => view! { <ContactPage/> }.into_view(),
    }
}

#[component]
fn PageHeader(page: Page) -> impl IntoView {
    let content = expect_context::<StoredValue<SiteContent>>();
    let copy = content.with_value(|c| c.page_copy(page).clone());

    view! {
        <div class="page-header">
            <h1>{copy.heading}</h1>
            <p class="page-intro">{copy.intro}</p>
        </div>
    }
}

/// Home page - hero, programs, impact figures
#[component]
pub fn HomePage(on_navigate: Callback<Page>) -> impl IntoView {
    let content = expect_context::<StoredValue<SiteContent>>();
    let (copy, home) = content.with_value(|c| (c.page_copy(Page::Home).clone(), c.home.clone()));
    let primary_target = home.primary_action.target;
    let secondary_target = home.secondary_action.target;

    view! {
        <section class="hero">
            <div class="hero-text">
                <h1>{copy.heading}</h1>
                <p class="page-intro">{copy.intro}</p>
                <div class="hero-actions">
                    <button class="cta-button" on:click=move |_| on_navigate.call(primary_target)>
                        {home.primary_action.label}
                    </button>
                    <button class="outline-button" on:click=move |_| on_navigate.call(secondary_target)>
                        {home.secondary_action.label}
                    </button>
                </div>
            </div>
            <div class="hero-image">
                <FallbackImg source=home.hero_image alt=home.hero_alt class="rounded shadow"/>
            </div>
        </section>

        <section class="programs">
            <h2>{home.programs_heading}</h2>
            <p class="section-intro">{home.programs_intro}</p>
            <div class="card-grid three">
                {home.programs.into_iter().map(|program| view! {
                    <div class="program-card">
                        <div class="program-icon"><IconGlyph icon=program.icon/></div>
                        <h3>{program.title}</h3>
                        <p>{program.description}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>

        <section class="impact">
            <h2>{home.impact_heading}</h2>
            <p class="section-intro">{home.impact_intro}</p>
            <div class="impact-grid">
                {home.impact.into_iter().map(|stat| view! {
                    <div class="impact-stat">
                        <p class="impact-figure">{stat.figure}</p>
                        <p class="impact-label">{stat.label}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

/// About page - mission, story, leadership
#[component]
pub fn AboutPage() -> impl IntoView {
    let content = expect_context::<StoredValue<SiteContent>>();
    let about = content.with_value(|c| c.about.clone());

    view! {
        <div class="page about-page">
            <PageHeader page=Page::About/>

            <div class="story">
                <div class="story-image">
                    <FallbackImg source=about.story_image alt=about.story_alt class="rounded shadow"/>
                </div>
                <div class="story-text">
                    <h2>{about.story_heading}</h2>
                    {about.story.into_iter().map(|paragraph| view! { <p>{paragraph}</p> }).collect_view()}
                </div>
            </div>

            <div class="team">
                <h2>{about.team_heading}</h2>
                <div class="card-grid three">
                    {about.team.into_iter().map(|member| view! {
                        <div class="team-card">
                            <FallbackImg source=member.image alt=member.name.clone() class="avatar"/>
                            <h3>{member.name}</h3>
                            <p class="team-role">{member.role}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}

/// Work page - project catalog
#[component]
pub fn WorkPage() -> impl IntoView {
    let content = expect_context::<StoredValue<SiteContent>>();
    let projects = content.with_value(|c| c.work.projects.clone());

    view! {
        <div class="page work-page">
            <PageHeader page=Page::Work/>
            <div class="card-grid projects">
                {projects.into_iter().map(|project| view! {
                    <div class="project-card">
                        <FallbackImg source=project.image alt=project.title.clone() class="project-image"/>
                        <div class="project-body">
                            <h3>{project.title}</h3>
                            <p>{project.description}</p>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

/// Get involved page - donate, volunteer, partner
#[component]
pub fn GetInvolvedPage() -> impl IntoView {
    let content = expect_context::<StoredValue<SiteContent>>();
    let ways = content.with_value(|c| c.get_involved.ways.clone());

    view! {
        <div class="page get-involved-page">
            <PageHeader page=Page::GetInvolved/>
            <div class="ways">
                {ways.into_iter().map(|way| {
                    let button_class = match way.emphasis {
                        Emphasis::Primary => "cta-button",
                        Emphasis::Secondary => "dark-button",
                    };
                    view! {
                        <div class="way-card">
                            <div class="way-icon"><IconGlyph icon=way.icon/></div>
                            <div class="way-body">
                                <h2>{way.title}</h2>
                                <p>{way.description}</p>
                                <button class=button_class>{way.action}</button>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Contact page - message form and organization details
///
/// The acknowledgment lives in this component's state, so it is discarded
/// when the visitor navigates away.
#[component]
pub fn ContactPage() -> impl IntoView {
    let content = expect_context::<StoredValue<SiteContent>>();
    let info = content.with_value(|c| c.contact.clone());
    let form = create_rw_signal(ContactPageState::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        form.update(|s| {
            s.submit();
        });
    };

    view! {
        <div class="page contact-page">
            <PageHeader page=Page::Contact/>

            <div class="contact-layout">
                <div class="contact-form-panel">
                    <h2>{info.form_heading}</h2>
                    <form on:submit=on_submit>
                        <div class="form-row two">
                            <ContactInput field=ContactField::Name form=form/>
                            <ContactInput field=ContactField::Email form=form/>
                        </div>
                        <div class="form-row">
                            <ContactInput field=ContactField::Subject form=form/>
                        </div>
                        <div class="form-row">
                            <ContactInput field=ContactField::Message form=form/>
                        </div>
                        <button type="submit" class="cta-button">{info.submit_label}</button>
                        {move || form.with(|s| s.acknowledgment()).map(|message| view! {
                            <p class="form-status">{message}</p>
                        })}
                    </form>
                </div>

                <div class="contact-info-panel">
                    <h2>{info.info_heading}</h2>
                    <div class="info-item">
                        <h3>"Address"</h3>
                        <p>{info.address}</p>
                    </div>
                    <div class="info-item">
                        <h3>"Email"</h3>
                        <p>{info.email}</p>
                    </div>
                    <div class="info-item">
                        <h3>"Phone"</h3>
                        <p>{info.phone}</p>
                    </div>
                    <div class="info-item">
                        <h3>"Follow Us"</h3>
                        <div class="social-links">
                            {info.social.into_iter().map(|link| view! {
                                <a href=link.url class="social-link">{link.name}</a>
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// One required, controlled form input
#[component]
fn ContactInput(field: ContactField, form: RwSignal<ContactPageState>) -> impl IntoView {
    let value = move || form.with(|s| s.form().get(field).to_string());
    let on_input = move |ev: ev::Event| form.update(|s| s.set_field(field, event_target_value(&ev)));

    match field {
        ContactField::Message => view! {
            <textarea
                class="form-input"
                placeholder=field.placeholder()
                rows=6
                required=true
                prop:value=value
                on:input=on_input
            />
        }
        .into_view(),
        _ => view! {
            <input
                class="form-input"
                type=field.input_type()
                placeholder=field.placeholder()
                required=true
                prop:value=value
                on:input=on_input
            />
        }
        .into_view(),
    }
}
