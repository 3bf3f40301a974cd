//! Fixed sample content served by [`crate::repository::MockCommunity`].

use time::macros::datetime;

use crate::model::{
    Author, Comment, Donation, ForumCategory, ForumTopic, LastReply, RequestCategory, RequestStatus, SupportRequest,
};

const RAJESH_KUMAR_DESCRIPTION: &str = "Advocate Rajesh Kumar passed away on 15th April after a brief illness. \
He is survived by his wife and two school-going children. The family needs financial support to manage their \
daily expenses and children's education.

Rajesh was a dedicated lawyer who had been practicing for the last 12 years in the district court. He was known \
for his pro-bono work for underprivileged clients. Unfortunately, due to the sudden nature of his illness and the \
high medical expenses incurred during his treatment, the family is now facing financial difficulties.

The funds raised will be directly transferred to his wife's bank account and will be used for:
1. Daily expenses and household needs
2. School fees for their children aged 10 and 8
3. Rent for their residence

Any contribution from the legal fraternity would be greatly appreciated and would help this family during this \
difficult time.";

#[allow(clippy::too_many_lines)]
#[must_use]
pub fn support_requests() -> Vec<SupportRequest> {
    vec![
        SupportRequest {
            id: "1".to_owned(),
            title: "Support for family of Adv. Rajesh Kumar".to_owned(),
            category: RequestCategory::Financial,
            description: RAJESH_KUMAR_DESCRIPTION.to_owned(),
            created_by: Author::new("3", "Amit Sharma"),
            created_at: datetime!(2023-04-20 0:00 UTC),
            updated_at: Some(datetime!(2023-04-21 0:00 UTC)),
            status: RequestStatus::Open,
            donations_received: Some(120_000),
            donations_goal: Some(500_000),
            recipient_name: Some("Mrs. Sunita Kumar".to_owned()),
            recipient_relationship: Some("Wife of deceased advocate".to_owned()),
        },
        SupportRequest {
            id: "2".to_owned(),
            title: "Medical assistance for Adv. Priya Verma".to_owned(),
            category: RequestCategory::Medical,
            description: "Advocate Priya Verma requires urgent medical treatment for a critical condition. She has \
                          been a dedicated member of our legal community for over 15 years."
                .to_owned(),
            created_by: Author::new("4", "Sunil Gupta"),
            created_at: datetime!(2023-04-18 0:00 UTC),
            updated_at: None,
            status: RequestStatus::InProgress,
            donations_received: Some(75_000),
            donations_goal: Some(300_000),
            recipient_name: None,
            recipient_relationship: None,
        },
        SupportRequest {
            id: "3".to_owned(),
            title: "Legal aid for senior advocate's property dispute".to_owned(),
            category: RequestCategory::Legal,
            description: "Senior Advocate Prakash Joshi, who is now 78 years old and in poor health, needs \
                          assistance with a complex property dispute that threatens his only residence."
                .to_owned(),
            created_by: Author::new("5", "Deepak Patel"),
            created_at: datetime!(2023-04-15 0:00 UTC),
            updated_at: None,
            status: RequestStatus::Open,
            donations_received: None,
            donations_goal: None,
            recipient_name: None,
            recipient_relationship: None,
        },
        SupportRequest {
            id: "4".to_owned(),
            title: "Support for family of Adv. Meena Kumari".to_owned(),
            category: RequestCategory::Financial,
            description: "Advocate Meena Kumari passed away in a road accident last week. She was the sole \
                          breadwinner for her family, including her elderly parents and 10-year-old daughter."
                .to_owned(),
            created_by: Author::new("6", "Vinod Sharma"),
            created_at: datetime!(2023-04-10 0:00 UTC),
            updated_at: None,
            status: RequestStatus::Open,
            donations_received: Some(205_000),
            donations_goal: Some(400_000),
            recipient_name: None,
            recipient_relationship: None,
        },
        SupportRequest {
            id: "5".to_owned(),
            title: "Medical support for Adv. Sanjay Gupta's surgery".to_owned(),
            category: RequestCategory::Medical,
            description: "Advocate Sanjay Gupta needs to undergo an urgent heart surgery. He has been practicing \
                          law for over 20 years but is currently facing financial difficulties."
                .to_owned(),
            created_by: Author::new("7", "Rahul Kumar"),
            created_at: datetime!(2023-04-05 0:00 UTC),
            updated_at: None,
            status: RequestStatus::Completed,
            donations_received: Some(350_000),
            donations_goal: Some(350_000),
            recipient_name: None,
            recipient_relationship: None,
        },
        SupportRequest {
            id: "6".to_owned(),
            title: "Support for junior lawyer's education expenses".to_owned(),
            category: RequestCategory::Financial,
            description: "A young lawyer who recently joined the bar is seeking support for advanced legal \
                          education to specialize in environmental law. This will enable them to better serve \
                          underrepresented communities."
                .to_owned(),
            created_by: Author::new("8", "Neelam Singh"),
            created_at: datetime!(2023-04-02 0:00 UTC),
            updated_at: None,
            status: RequestStatus::Open,
            donations_received: Some(30_000),
            donations_goal: Some(150_000),
            recipient_name: None,
            recipient_relationship: None,
        },
    ]
}

#[must_use]
pub fn comments() -> Vec<(String, Comment)> {
    vec![
        (
            "1".to_owned(),
            Comment {
                id: "1".to_owned(),
                text: "I had the privilege of working with Adv. Rajesh on several cases. He was a brilliant lawyer \
                       and an even better human being. My deepest condolences to the family."
                    .to_owned(),
                created_at: datetime!(2023-04-21 10:30 UTC),
                created_by: Author::new("4", "Sunil Gupta"),
            },
        ),
        (
            "1".to_owned(),
            Comment {
                id: "2".to_owned(),
                text: "This is such a tragic loss. I've made a donation and encourage others to help this family \
                       during this difficult time."
                    .to_owned(),
                created_at: datetime!(2023-04-22 14:15 UTC),
                created_by: Author::new("5", "Priya Patel"),
            },
        ),
    ]
}

#[must_use]
pub fn donations() -> Vec<(String, Donation)> {
    vec![
        (
            "1".to_owned(),
            Donation {
                id: "1".to_owned(),
                amount: 10_000,
                message: Some(
                    "My heartfelt condolences to the family. May they find strength in this difficult time."
                        .to_owned(),
                ),
                created_at: datetime!(2023-04-21 9:20 UTC),
                created_by: Author::new("6", "Vikram Singh"),
                is_anonymous: false,
            },
        ),
        (
            "1".to_owned(),
            Donation {
                id: "2".to_owned(),
                amount: 25_000,
                message: None,
                created_at: datetime!(2023-04-21 11:45 UTC),
                created_by: Author::new("7", "Anonymous Donor"),
                is_anonymous: true,
            },
        ),
        (
            "1".to_owned(),
            Donation {
                id: "3".to_owned(),
                amount: 5_000,
                message: Some("Rajesh was my colleague. Praying for his family.".to_owned()),
                created_at: datetime!(2023-04-22 16:30 UTC),
                created_by: Author::new("8", "Neha Verma"),
                is_anonymous: false,
            },
        ),
    ]
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| (*t).to_owned()).collect()
}

fn reply(created_at: time::OffsetDateTime, name: &str) -> Option<LastReply> {
    Some(LastReply { created_at, author_name: name.to_owned() })
}

#[allow(clippy::too_many_lines)]
#[must_use]
pub fn forum_topics() -> Vec<ForumTopic> {
    vec![
        ForumTopic {
            id: "1".to_owned(),
            title: "Discussion on the new Bar Council regulations".to_owned(),
            category: ForumCategory::Announcements,
            created_by: Author::new("1", "Admin User"),
            created_at: datetime!(2023-04-19 0:00 UTC),
            reply_count: 23,
            last_reply: reply(datetime!(2023-04-21 0:00 UTC), "Vikram Singh"),
            is_pinned: true,
            tags: tags(&["regulations", "bar council"]),
        },
        ForumTopic {
            id: "2".to_owned(),
            title: "Annual Legal Conference 2023 - Registration Open".to_owned(),
            category: ForumCategory::Events,
            created_by: Author::new("3", "Amit Sharma"),
            created_at: datetime!(2023-04-16 0:00 UTC),
            reply_count: 15,
            last_reply: reply(datetime!(2023-04-20 0:00 UTC), "Rahul Mehta"),
            is_pinned: false,
            tags: tags(&["conference", "event", "networking"]),
        },
        ForumTopic {
            id: "3".to_owned(),
            title: "Guidance needed on a complex tax evasion case".to_owned(),
            category: ForumCategory::LegalAdvice,
            created_by: Author::new("6", "Neha Kapoor"),
            created_at: datetime!(2023-04-14 0:00 UTC),
            reply_count: 7,
            last_reply: reply(datetime!(2023-04-18 0:00 UTC), "John Doe"),
            is_pinned: false,
            tags: Vec::new(),
        },
        ForumTopic {
            id: "4".to_owned(),
            title: "Upcoming webinar: Digital Evidence in Criminal Trials".to_owned(),
            category: ForumCategory::Events,
            created_by: Author::new("8", "Priya Singh"),
            created_at: datetime!(2023-04-12 0:00 UTC),
            reply_count: 5,
            last_reply: None,
            is_pinned: false,
            tags: tags(&["webinar", "criminal law", "digital evidence"]),
        },
        ForumTopic {
            id: "5".to_owned(),
            title: "Recent Supreme Court judgment on environmental regulations".to_owned(),
            category: ForumCategory::CourtProceedings,
            created_by: Author::new("2", "John Doe"),
            created_at: datetime!(2023-04-10 0:00 UTC),
            reply_count: 18,
            last_reply: reply(datetime!(2023-04-15 0:00 UTC), "Suresh Kumar"),
            is_pinned: false,
            tags: tags(&["supreme court", "environmental law"]),
        },
        ForumTopic {
            id: "6".to_owned(),
            title: "Career transition from litigation to corporate law".to_owned(),
            category: ForumCategory::Career,
            created_by: Author::new("9", "Rajiv Patel"),
            created_at: datetime!(2023-04-08 0:00 UTC),
            reply_count: 12,
            last_reply: reply(datetime!(2023-04-14 0:00 UTC), "Meena Gupta"),
            is_pinned: false,
            tags: tags(&["career advice", "corporate law"]),
        },
        ForumTopic {
            id: "7".to_owned(),
            title: "Best practices for client billing and invoicing".to_owned(),
            category: ForumCategory::GeneralDiscussion,
            created_by: Author::new("10", "Deepak Sharma"),
            created_at: datetime!(2023-04-05 0:00 UTC),
            reply_count: 9,
            last_reply: reply(datetime!(2023-04-11 0:00 UTC), "Admin User"),
            is_pinned: false,
            tags: tags(&["practice management", "billing"]),
        },
        ForumTopic {
            id: "8".to_owned(),
            title: "Legal aid initiatives in rural areas - Volunteers needed".to_owned(),
            category: ForumCategory::Announcements,
            created_by: Author::new("1", "Admin User"),
            created_at: datetime!(2023-04-03 0:00 UTC),
            reply_count: 14,
            last_reply: reply(datetime!(2023-04-17 0:00 UTC), "Vikram Singh"),
            is_pinned: false,
            tags: tags(&["legal aid", "volunteer", "rural"]),
        },
    ]
}
