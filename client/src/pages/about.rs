//! Static "About" page: mission, offerings, team, and history.

use community::{Route, format};
use leptos::prelude::*;

use crate::components::avatar::Avatar;

struct TeamMember {
    name: &'static str,
    role: &'static str,
    bio: &'static str,
}

const TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Rajiv Dhawan",
        role: "Director",
        bio: "Senior advocate with over 25 years of experience at the Supreme Court.",
    },
    TeamMember {
        name: "Priya Singh",
        role: "Secretary",
        bio: "Corporate lawyer who coordinates the association's member outreach.",
    },
    TeamMember {
        name: "Vikram Malhotra",
        role: "Treasurer",
        bio: "Tax law specialist overseeing fund management and financial reporting.",
    },
    TeamMember {
        name: "Anita Gupta",
        role: "Community Manager",
        bio: "Family lawyer who moderates the forum and supports new members.",
    },
];

const MILESTONES: [(&str, &str); 4] = [
    ("2020", "LegalAid Connect founded by a group of lawyers after the loss of several colleagues during the pandemic."),
    ("2021", "Launched the emergency support fund and helped the first 50 families."),
    ("2022", "Opened the community forum and reached 1,000 registered members."),
    ("2023", "Expanded support to medical and legal assistance requests across India."),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page">
            <header class="page__header page__header--center">
                <h1 class="page__title">"About LegalAid Connect"</h1>
                <p class="page__subtitle">
                    "A community of legal professionals dedicated to supporting each other and the families of lawyers in times of need."
                </p>
            </header>

            <div class="grid grid--two">
                <section class="panel">
                    <h2 class="panel__title">"Our Mission"</h2>
                    <p>
                        "To create a supportive network where lawyers can help each other and ensure that no lawyer's family is left without support during difficult times."
                    </p>
                </section>
                <section class="panel">
                    <h2 class="panel__title">"Our Vision"</h2>
                    <p>
                        "A legal community where every professional has a safety net, and where solidarity among lawyers extends beyond the courtroom."
                    </p>
                </section>
            </div>

            <section class="section">
                <h2 class="section__title section__title--center">"What We Offer"</h2>
                <div class="grid grid--three">
                    <article class="feature">
                        <h3 class="feature__title">"Emergency Financial Support"</h3>
                        <p class="feature__body">
                            "Direct financial help for families of lawyers facing loss, illness, or sudden hardship."
                        </p>
                    </article>
                    <article class="feature">
                        <h3 class="feature__title">"Professional Community"</h3>
                        <p class="feature__body">
                            "A forum to share knowledge, discuss regulations, and find mentors across specializations."
                        </p>
                    </article>
                    <article class="feature">
                        <h3 class="feature__title">"Transparent Fund Management"</h3>
                        <p class="feature__body">
                            "Every donation is tracked against a request so donors can see exactly where their money goes."
                        </p>
                    </article>
                </div>
            </section>

            <section class="section">
                <h2 class="section__title section__title--center">"Our Team"</h2>
                <div class="grid grid--four">
                    {TEAM
                        .into_iter()
                        .map(|member| {
                            view! {
                                <article class="team-card">
                                    <Avatar name=member.name.to_owned() large=true/>
                                    <h3 class="team-card__name">{member.name}</h3>
                                    <p class="team-card__role">{member.role}</p>
                                    <p class="team-card__bio">{member.bio}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <h2 class="section__title section__title--center">"Our Journey"</h2>
                <ol class="timeline">
                    {MILESTONES
                        .into_iter()
                        .map(|(year, text)| {
                            view! {
                                <li class="timeline__item">
                                    <span class="timeline__year">{year}</span>
                                    <p>{text}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </section>

            <section class="cta">
                <h2 class="cta__title">"Join Our Community Today"</h2>
                <p class="cta__body">
                    {format!(
                        "Together we can make sure no lawyer's family faces hardship alone. Even {} makes a difference.",
                        format::rupees_whole(500)
                    )}
                </p>
                <div class="button-row button-row--center">
                    <a class="button button--gold" href=Route::Register.path()>"Register Now"</a>
                    <a class="button button--outline-light" href=Route::Donate.path()>"Make a Donation"</a>
                </div>
            </section>
        </div>
    }
}
