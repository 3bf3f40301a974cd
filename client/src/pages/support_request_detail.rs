//! Support request detail: description, comments, donations, and an inline
//! donation form.
//!
//! ARCHITECTURE
//! ============
//! The route id is resolved against the `Community` repository on every
//! param change; unknown ids render a not-found block instead of redirecting.
//! The selected tab is page-local state so "Support This Request" and the
//! quick actions can switch to the donate tab.

#[cfg(test)]
#[path = "support_request_detail_test.rs"]
mod support_request_detail_test;

use community::forms::{Submission, comment_notice, invalid_form_notice, validate_comment};
use community::{Comment, Donation, RequestCategory, Route, SupportRequest, format};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::auth_prompt::AuthRequired;
use crate::components::avatar::Avatar;
use crate::components::badge::{ProgressBar, request_category_class, status_class};
use crate::components::donation_form::DonationForm;
use crate::state::Community;
use crate::state::session::{Session, is_authenticated};
use crate::state::toasts::{ToastState, notify};

/// Default amount offered by the inline donation form.
const REQUEST_DONATION_AMOUNT: u64 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailTab {
    Details,
    Comments,
    Donations,
    Donate,
}

impl DetailTab {
    pub const ALL: [Self; 4] = [Self::Details, Self::Comments, Self::Donations, Self::Donate];

    /// Tab caption; comment and donation tabs carry their counts.
    pub fn label(self, comments: usize, donations: usize) -> String {
        match self {
            Self::Details => "Details".to_owned(),
            Self::Comments => format!("Comments ({comments})"),
            Self::Donations => format!("Donations ({donations})"),
            Self::Donate => "Donate".to_owned(),
        }
    }
}

/// Rupees still needed to reach `goal`.
pub fn remaining_goal(received: u64, goal: u64) -> u64 {
    goal.saturating_sub(received)
}

/// `Apr 21, 2023 at 2:15 PM`.
pub fn timestamp(at: time::OffsetDateTime) -> String {
    format!("{} at {}", format::date(at), format::clock_time(at))
}

fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[component]
pub fn SupportRequestDetailPage() -> impl IntoView {
    let params = use_params_map();
    let community = expect_context::<Community>();
    let request_id = move || params.read().get("id").unwrap_or_default();

    move || {
        let id = request_id();
        match community.support_request(&id) {
            Some(request) => {
                let comments = community.comments_for(&id);
                let donations = community.donations_for(&id);
                view! { <RequestDetail request=request comments=comments donations=donations/> }.into_any()
            }
            None => view! { <RequestNotFound/> }.into_any(),
        }
    }
}

#[component]
fn RequestNotFound() -> impl IntoView {
    view! {
        <div class="page page--narrow empty-state">
            <h1 class="page__title">"Support request not found"</h1>
            <p class="page__subtitle">"The support request you're looking for doesn't exist or has been removed."</p>
            <a class="button button--primary" href=Route::SupportRequests.path()>"Back to Support Requests"</a>
        </div>
    }
}

#[component]
fn RequestDetail(request: SupportRequest, comments: Vec<Comment>, donations: Vec<Donation>) -> impl IntoView {
    let tab = RwSignal::new(DetailTab::Details);
    let comment_count = comments.len();
    let donation_count = donations.len();
    let is_financial = request.category == RequestCategory::Financial;
    let posted = format!(
        "Posted by {} • {}",
        request.created_by.name,
        format::relative_time(request.created_at, time::OffsetDateTime::now_utc())
    );
    let donate_now = move |_: leptos::ev::MouseEvent| tab.set(DetailTab::Donate);

    let panel = {
        let request = request.clone();
        move || match tab.get() {
            DetailTab::Details => view! { <DetailsPanel request=request.clone()/> }.into_any(),
            DetailTab::Comments => view! { <CommentsPanel comments=comments.clone()/> }.into_any(),
            DetailTab::Donations => {
                view! { <DonationsPanel request=request.clone() donations=donations.clone() tab=tab/> }.into_any()
            }
            DetailTab::Donate => view! { <DonatePanel title=request.title.clone() tab=tab/> }.into_any(),
        }
    };

    view! {
        <div class="page">
            <a class="back-link" href=Route::SupportRequests.path()>"← Back to Support Requests"</a>
            <header class="page__header page__header--split">
                <div>
                    <div class="card__badges">
                        <span class=request_category_class(request.category)>{request.category.label()}</span>
                        <span class=status_class(request.status)>{request.status.label()}</span>
                    </div>
                    <h1 class="page__title">{request.title.clone()}</h1>
                    <p class="page__subtitle">{posted}</p>
                </div>
                {is_financial.then(|| {
                    view! { <button class="button button--gold" on:click=donate_now>"Support This Request"</button> }
                })}
            </header>
            <div class="layout-sidebar">
                <div class="stack">
                    <div class="tabs">
                        {DetailTab::ALL
                            .into_iter()
                            .map(|t| {
                                view! {
                                    <button
                                        class="tabs__tab"
                                        class:tabs__tab--active=move || tab.get() == t
                                        on:click=move |_| tab.set(t)
                                    >
                                        {t.label(comment_count, donation_count)}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    {panel}
                </div>
                <RequestSidebar request=request tab=tab/>
            </div>
        </div>
    }
}

#[component]
fn DetailsPanel(request: SupportRequest) -> impl IntoView {
    let paragraphs: Vec<String> = request.paragraphs().into_iter().map(str::to_owned).collect();
    let funding = request.funding().map(|(received, goal)| {
        let percent = format::progress_percent(received, goal);
        view! {
            <section class="panel">
                <h2 class="panel__title">"Funding Progress"</h2>
                <dl class="facts facts--three">
                    <div>
                        <dt>"Donation Target"</dt>
                        <dd>{format::rupees(goal)}</dd>
                    </div>
                    <div>
                        <dt>"Donations Received"</dt>
                        <dd>{format::rupees(received)}</dd>
                    </div>
                    <div>
                        <dt>"Remaining Goal"</dt>
                        <dd>{format::rupees(remaining_goal(received, goal))}</dd>
                    </div>
                </dl>
                <ProgressBar percent=percent/>
                <p class="muted">{format!("{percent}% of goal achieved")}</p>
            </section>
        }
    });
    let recipient = request.recipient_name.clone().map(|name| {
        let relationship = request.recipient_relationship.clone().unwrap_or_else(|| "Not specified".to_owned());
        view! {
            <section class="panel">
                <dl class="facts">
                    <dt>"Recipient"</dt>
                    <dd>{name}</dd>
                    <dt>"Relationship"</dt>
                    <dd>{relationship}</dd>
                </dl>
            </section>
        }
    });

    view! {
        <div class="stack">
            <section class="panel">
                <h2 class="panel__title">"Description"</h2>
                <div class="prose">{paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}</div>
            </section>
            {funding}
            {recipient}
        </div>
    }
}

#[component]
fn CommentsPanel(comments: Vec<Comment>) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let list = if comments.is_empty() {
        view! {
            <div class="empty-state">
                <h3>"No comments yet"</h3>
                <p>"Be the first to comment on this support request"</p>
            </div>
        }
        .into_any()
    } else {
        view! {
            <ul class="comment-list">
                {comments
                    .into_iter()
                    .map(|comment| {
                        view! {
                            <li class="comment">
                                <Avatar
                                    name=comment.created_by.name.clone()
                                    image=comment.created_by.image.clone().unwrap_or_default()
                                />
                                <div class="comment__body">
                                    <p class="comment__meta">
                                        <strong>{comment.created_by.name}</strong>
                                        " "
                                        <span class="muted">{timestamp(comment.created_at)}</span>
                                    </p>
                                    <p>{comment.text}</p>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <section class="panel">
            <h2 class="panel__title">"Comments"</h2>
            {list}
            <Show
                when=move || is_authenticated(session)
                fallback=|| view! {
                    <div class="join-prompt">
                        <p>"You need to be logged in to comment"</p>
                        <div class="button-row button-row--center">
                            <a class="button button--outline" href=Route::Login.path()>"Login"</a>
                            <a class="button button--primary" href=Route::Register.path()>"Register"</a>
                        </div>
                    </div>
                }
            >
                <CommentForm/>
            </Show>
        </section>
    }
}

#[component]
fn CommentForm() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let text = RwSignal::new(String::new());
    let submission = RwSignal::new(Submission::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let comment = match text.with_untracked(|t| validate_comment(t)) {
            Ok(comment) => comment,
            Err(e) => {
                notify(toasts, invalid_form_notice(&e));
                return;
            }
        };
        if !submission.try_update(Submission::try_begin).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            community::simulate(&crate::util::delay::TimerDelay, community::latency::COMMENT_LATENCY, move || {
                log::info!("comment posted ({} chars)", comment.len());
            })
            .await;
            submission.update(Submission::finish);
            notify(toasts, comment_notice());
            text.set(String::new());
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = comment;
    };

    view! {
        <form class="form comment-form" on:submit=on_submit>
            <label for="comment">"Add a Comment"</label>
            <textarea
                id="comment"
                class="input"
                rows="3"
                required=true
                placeholder="Share your thoughts or words of support..."
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            ></textarea>
            <button class="button button--primary" type="submit" disabled=move || submission.get().is_pending()>
                {move || if submission.get().is_pending() { "Posting..." } else { "Post Comment" }}
            </button>
        </form>
    }
}

#[component]
fn DonationsPanel(request: SupportRequest, donations: Vec<Donation>, tab: RwSignal<DetailTab>) -> impl IntoView {
    if donations.is_empty() {
        return view! {
            <section class="panel empty-state">
                <h3>"No donations yet"</h3>
                <p>"Be the first to donate to this support request"</p>
                <button class="button button--gold" on:click=move |_| tab.set(DetailTab::Donate)>"Make a Donation"</button>
            </section>
        }
        .into_any();
    }

    let count = donations.len();
    let summary = request.funding().map(|(received, goal)| {
        let percent = format::progress_percent(received, goal);
        view! {
            <div class="donation-summary">
                <p class="donation-summary__totals">
                    {format!("{} raised of {} goal", format::rupees(received), format::rupees(goal))}
                </p>
                <ProgressBar percent=percent/>
                <p class="muted">{format!("{percent}% of goal achieved from {count} donations")}</p>
            </div>
        }
    });

    view! {
        <section class="panel">
            <h2 class="panel__title">"Donations"</h2>
            {summary}
            <ul class="donation-list">
                {donations
                    .into_iter()
                    .map(|donation| {
                        let message = donation.message.clone().map(|m| view! { <p class="donation__message">{format!("\"{m}\"")}</p> });
                        view! {
                            <li class="donation">
                                <div class="donation__header">
                                    <div>
                                        <strong>{donation.donor_name().to_owned()}</strong>
                                        <p class="muted">{format::date(donation.created_at)}</p>
                                    </div>
                                    <span class="donation__amount">{format::rupees(donation.amount)}</span>
                                </div>
                                {message}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button class="button button--gold button--block" on:click=move |_| tab.set(DetailTab::Donate)>
                "Make a Donation"
            </button>
        </section>
    }
    .into_any()
}

#[component]
fn DonatePanel(title: String, tab: RwSignal<DetailTab>) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let on_success = Callback::new(move |()| {
        tab.set(DetailTab::Details);
        scroll_to_top();
    });

    view! {
        <Show
            when=move || is_authenticated(session)
            fallback=|| view! { <AuthRequired message="You need to be logged in to make a donation"/> }
        >
            <DonationForm request_title=title.clone() default_amount=REQUEST_DONATION_AMOUNT on_success=on_success/>
        </Show>
    }
}

#[component]
fn RequestSidebar(request: SupportRequest, tab: RwSignal<DetailTab>) -> impl IntoView {
    let is_financial = request.category == RequestCategory::Financial;
    let member_since = format!("Member since {}", format::month_year(request.created_at));
    let updated = format::date(request.updated_at.unwrap_or(request.created_at));
    let target = request.donations_goal.map(|goal| {
        view! {
            <dt>"Target Amount"</dt>
            <dd>{format::rupees(goal)}</dd>
        }
    });

    view! {
        <aside class="stack">
            <section class="panel">
                <h2 class="panel__title">"About the Requester"</h2>
                <div class="requester">
                    <Avatar
                        name=request.created_by.name.clone()
                        image=request.created_by.image.clone().unwrap_or_default()
                        large=true
                    />
                    <div>
                        <p class="requester__name">{request.created_by.name.clone()}</p>
                        <p class="muted">{member_since}</p>
                    </div>
                </div>
            </section>
            {is_financial.then(|| {
                view! {
                    <section class="panel">
                        <h2 class="panel__title">"Quick Actions"</h2>
                        <div class="stack">
                            <button class="button button--gold button--block" on:click=move |_| tab.set(DetailTab::Donate)>
                                "Make a Donation"
                            </button>
                            <button class="button button--outline button--block" on:click=move |_| tab.set(DetailTab::Comments)>
                                "Leave a Comment"
                            </button>
                        </div>
                    </section>
                }
            })}
            <section class="panel">
                <h2 class="panel__title">"Support Request Details"</h2>
                <dl class="facts">
                    <dt>"Status"</dt>
                    <dd><span class=status_class(request.status)>{request.status.label()}</span></dd>
                    <dt>"Posted"</dt>
                    <dd>{format::date(request.created_at)}</dd>
                    <dt>"Last Updated"</dt>
                    <dd>{updated}</dd>
                    {target}
                </dl>
            </section>
        </aside>
    }
}
