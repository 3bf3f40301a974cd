//! Member profile: view and edit account details.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use community::forms::{LEGAL_SPECIALIZATIONS, MAX_EXPERIENCE_YEARS, ProfileForm, Submission, invalid_form_notice};
use community::User;
use leptos::prelude::*;

use crate::components::auth_prompt::MemberOnly;
use crate::components::avatar::Avatar;
use crate::state::session::{Session, current_user};
use crate::state::toasts::{ToastState, notify};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProfileTab {
    Info,
    Security,
    Activity,
}

impl ProfileTab {
    const ALL: [Self; 3] = [Self::Info, Self::Security, Self::Activity];

    fn label(self) -> &'static str {
        match self {
            Self::Info => "Profile Information",
            Self::Security => "Security",
            Self::Activity => "Recent Activity",
        }
    }
}

/// `1 year`, `8 years`.
pub fn experience_label(years: u32) -> String {
    if years == 1 { "1 year".to_owned() } else { format!("{years} years") }
}

fn or_not_specified(value: Option<&String>) -> String {
    value.cloned().unwrap_or_else(|| "Not specified".to_owned())
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <MemberOnly message="You need to be logged in to view your profile">
            <ProfileContent/>
        </MemberOnly>
    }
}

#[component]
fn ProfileContent() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let tab = RwSignal::new(ProfileTab::Info);
    let editing = RwSignal::new(false);
    let form = RwSignal::new(ProfileForm::default());

    let on_edit = move |_: leptos::ev::MouseEvent| {
        if let Some(user) = session.with_untracked(|s| s.user().cloned()) {
            form.set(ProfileForm::from_user(&user));
            editing.set(true);
        }
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1 class="page__title">"My Profile"</h1>
                <p class="page__subtitle">"Manage your account information and settings."</p>
            </header>
            <div class="tabs">
                {ProfileTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button class="tabs__tab" class:tabs__tab--active=move || tab.get() == t on:click=move |_| tab.set(t)>
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || match tab.get() {
                ProfileTab::Info => view! {
                    <Show
                        when=move || editing.get()
                        fallback=move || view! {
                            {move || current_user(session).map(|user| view! { <ProfileDetails user=user/> })}
                            <div class="button-row">
                                <button class="button button--primary" on:click=on_edit>"Edit Profile"</button>
                            </div>
                        }
                    >
                        <ProfileEditor form=form editing=editing/>
                    </Show>
                }
                .into_any(),
                ProfileTab::Security => view! { <SecurityPanel/> }.into_any(),
                ProfileTab::Activity => view! {
                    <section class="panel">
                        <h2 class="panel__title">"Recent Activity"</h2>
                        <p class="empty-state">"No recent activity to display"</p>
                    </section>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn ProfileDetails(user: User) -> impl IntoView {
    let specialization = user.specialization.clone().unwrap_or_else(|| "No specialization set".to_owned());
    let location = or_not_specified(user.location.as_ref());
    let bar_number = or_not_specified(user.bar_number.as_ref());
    let experience = user.experience.map_or_else(|| "Not specified".to_owned(), experience_label);

    view! {
        <section class="panel profile">
            <div class="profile__identity">
                <Avatar name=user.name.clone() image=user.profile_image.clone().unwrap_or_default() large=true/>
                <div>
                    <h2 class="profile__name">{user.name.clone()}</h2>
                    <p class="profile__specialization">{specialization}</p>
                </div>
            </div>
            <div class="grid grid--two">
                <div>
                    <h3 class="profile__heading">"Contact Information"</h3>
                    <dl class="facts">
                        <dt>"Email"</dt>
                        <dd>{user.email.clone()}</dd>
                        <dt>"Location"</dt>
                        <dd>{location}</dd>
                    </dl>
                </div>
                <div>
                    <h3 class="profile__heading">"Professional Details"</h3>
                    <dl class="facts">
                        <dt>"Bar Council Number"</dt>
                        <dd>{bar_number}</dd>
                        <dt>"Experience"</dt>
                        <dd>{experience}</dd>
                    </dl>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProfileEditor(form: RwSignal<ProfileForm>, editing: RwSignal<bool>) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let submission = RwSignal::new(Submission::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let update = match form.with_untracked(ProfileForm::validate) {
            Ok(update) => update,
            Err(e) => {
                notify(toasts, invalid_form_notice(&e));
                return;
            }
        };
        if !submission.try_update(Submission::try_begin).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "hydrate")]
        session.update(Session::begin_request);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = community::simulate(
                &crate::util::delay::TimerDelay,
                community::latency::PROFILE_LATENCY,
                move || crate::state::session::apply(session, |s| s.update_profile(update)),
            )
            .await;
            submission.update(Submission::finish);
            notify(toasts, community::session::profile_notice(&outcome));
            if outcome.is_ok() {
                editing.set(false);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (update, session);
    };

    view! {
        <section class="panel">
            <form class="form" on:submit=on_submit>
                <div class="grid grid--two">
                    <div class="field">
                        <label for="profile-name">"Full Name"</label>
                        <input
                            id="profile-name"
                            class="input"
                            required=true
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label for="profile-email">"Email"</label>
                        <input
                            id="profile-email"
                            class="input"
                            type="email"
                            disabled=true
                            prop:value=move || form.with(|f| f.email.clone())
                        />
                    </div>
                    <div class="field">
                        <label for="profile-specialization">"Legal Specialization"</label>
                        <select
                            id="profile-specialization"
                            class="input"
                            prop:value=move || form.with(|f| f.specialization.clone())
                            on:change=move |ev| form.update(|f| f.specialization = event_target_value(&ev))
                        >
                            <option value="">"Select specialization"</option>
                            {LEGAL_SPECIALIZATIONS
                                .into_iter()
                                .map(|s| view! { <option value=s>{s}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="field">
                        <label for="profile-experience">"Years of Experience"</label>
                        <select
                            id="profile-experience"
                            class="input"
                            prop:value=move || form.with(|f| f.experience.to_string())
                            on:change=move |ev| {
                                let years = event_target_value(&ev).parse().unwrap_or(0);
                                form.update(|f| f.experience = years);
                            }
                        >
                            {(0..=MAX_EXPERIENCE_YEARS)
                                .map(|years| view! { <option value=years.to_string()>{experience_label(years)}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="field">
                        <label for="profile-bar-number">"Bar Council Number"</label>
                        <input
                            id="profile-bar-number"
                            class="input"
                            prop:value=move || form.with(|f| f.bar_number.clone())
                            on:input=move |ev| form.update(|f| f.bar_number = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label for="profile-location">"Location"</label>
                        <input
                            id="profile-location"
                            class="input"
                            placeholder="City, State"
                            prop:value=move || form.with(|f| f.location.clone())
                            on:input=move |ev| form.update(|f| f.location = event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="field">
                    <label for="profile-image">"Profile Image URL"</label>
                    <input
                        id="profile-image"
                        class="input"
                        type="url"
                        placeholder="https://example.com/your-image.jpg"
                        prop:value=move || form.with(|f| f.profile_image.clone())
                        on:input=move |ev| form.update(|f| f.profile_image = event_target_value(&ev))
                    />
                </div>
                <div class="button-row button-row--end">
                    <button class="button button--outline" type="button" on:click=move |_| editing.set(false)>
                        "Cancel"
                    </button>
                    <button class="button button--primary" type="submit" disabled=move || submission.get().is_pending()>
                        {move || if submission.get().is_pending() { "Saving..." } else { "Save Changes" }}
                    </button>
                </div>
            </form>
        </section>
    }
}

/// Password change is not backed by the session store; the panel is display
/// only.
#[component]
fn SecurityPanel() -> impl IntoView {
    view! {
        <section class="panel">
            <h2 class="panel__title">"Security"</h2>
            <form class="form" on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                <div class="field">
                    <label for="current-password">"Current Password"</label>
                    <input id="current-password" class="input" type="password"/>
                </div>
                <div class="field">
                    <label for="new-password">"New Password"</label>
                    <input id="new-password" class="input" type="password"/>
                </div>
                <div class="field">
                    <label for="confirm-new-password">"Confirm New Password"</label>
                    <input id="confirm-new-password" class="input" type="password"/>
                </div>
                <button class="button button--primary" type="submit">"Update Password"</button>
            </form>
        </section>
    }
}
