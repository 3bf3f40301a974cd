//! Form field state and client-side validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page components keep one of these structs in a signal, bind inputs to its
//! fields, and call `validate` on submit. Validation mirrors native form
//! constraints (required, `type="email"`, `min="1"`) so the rules are testable
//! without a browser. A validated form yields a draft that the page submits
//! through [`crate::latency::simulate`].

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::model::{ForumCategory, ProfileUpdate, RegisterData, RequestCategory, User};
use crate::notice::Notice;

pub const LEGAL_SPECIALIZATIONS: [&str; 12] = [
    "Criminal Law",
    "Civil Law",
    "Corporate Law",
    "Family Law",
    "Intellectual Property",
    "Tax Law",
    "Constitutional Law",
    "Environmental Law",
    "Real Estate Law",
    "Labor Law",
    "Immigration Law",
    "Other",
];

pub const RECIPIENT_RELATIONSHIPS: [&str; 5] =
    ["Self", "Family of deceased colleague", "Colleague in need", "Family member", "Other"];

pub const QUICK_AMOUNTS: [u64; 5] = [500, 1000, 2000, 5000, 10000];

pub const DEFAULT_DONATION_AMOUNT: u64 = 1000;

/// Upper bound offered by the experience select.
pub const MAX_EXPERIENCE_YEARS: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("Enter a whole amount of at least 1")]
    InvalidAmount,
    #[error("Experience must be between 0 and 50 years")]
    InvalidExperience,
}

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Required(field));
    }
    Ok(trimmed.to_owned())
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn email(value: &str) -> Result<String, FormError> {
    let value = required(value, "Email")?;
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => Ok(value),
        _ => Err(FormError::InvalidEmail),
    }
}

/// Parse a positive whole rupee amount.
///
/// # Errors
///
/// [`FormError::InvalidAmount`] for blank, non-numeric, or zero input.
pub fn parse_amount(raw: &str) -> Result<u64, FormError> {
    match raw.trim().parse::<u64>() {
        Ok(amount) if amount >= 1 => Ok(amount),
        _ => Err(FormError::InvalidAmount),
    }
}

/// Split a comma-separated tag list, dropping blanks.
#[must_use]
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|t| !t.is_empty()).map(str::to_owned).collect()
}

// =============================================================================
// SUBMISSION GUARD
// =============================================================================

/// Allows one in-flight submission per form instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Submission {
    pending: bool,
}

impl Submission {
    /// Mark a submission as started. Returns `false` if one is already pending.
    pub fn try_begin(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn finish(&mut self) {
        self.pending = false;
    }

    #[must_use]
    pub fn is_pending(self) -> bool {
        self.pending
    }
}

// =============================================================================
// AUTH FORMS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Returns `(email, password)` ready for authentication.
    ///
    /// # Errors
    ///
    /// Missing fields or a malformed email.
    pub fn validate(&self) -> Result<(String, String), FormError> {
        let email = email(&self.email)?;
        if self.password.is_empty() {
            return Err(FormError::Required("Password"));
        }
        Ok((email, self.password.clone()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub specialization: String,
    pub bar_number: String,
}

impl RegisterForm {
    /// # Errors
    ///
    /// Missing required fields or a malformed email. Password equality is
    /// left to the session store.
    pub fn validate(&self) -> Result<RegisterData, FormError> {
        let name = required(&self.name, "Full name")?;
        let email = email(&self.email)?;
        if self.password.is_empty() {
            return Err(FormError::Required("Password"));
        }
        if self.confirm_password.is_empty() {
            return Err(FormError::Required("Confirm password"));
        }
        Ok(RegisterData {
            name,
            email,
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            specialization: optional(&self.specialization),
            bar_number: optional(&self.bar_number),
        })
    }
}

/// Editable copy of the current profile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    /// Read-only in the UI.
    pub email: String,
    pub specialization: String,
    pub experience: u32,
    pub bar_number: String,
    pub location: String,
    pub profile_image: String,
}

impl ProfileForm {
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            specialization: user.specialization.clone().unwrap_or_default(),
            experience: user.experience.unwrap_or(0),
            bar_number: user.bar_number.clone().unwrap_or_default(),
            location: user.location.clone().unwrap_or_default(),
            profile_image: user.profile_image.clone().unwrap_or_default(),
        }
    }

    /// Every edited field is sent; a blank optional field clears it.
    ///
    /// # Errors
    ///
    /// Blank name or experience above [`MAX_EXPERIENCE_YEARS`].
    pub fn validate(&self) -> Result<ProfileUpdate, FormError> {
        let name = required(&self.name, "Full name")?;
        if self.experience > MAX_EXPERIENCE_YEARS {
            return Err(FormError::InvalidExperience);
        }
        Ok(ProfileUpdate {
            name: Some(name),
            specialization: Some(optional(&self.specialization)),
            bar_number: Some(optional(&self.bar_number)),
            experience: Some(self.experience),
            location: Some(optional(&self.location)),
            profile_image: Some(optional(&self.profile_image)),
        })
    }
}

// =============================================================================
// DONATION
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DonationKind {
    #[default]
    OneTime,
    Monthly,
    Quarterly,
    Yearly,
}

impl DonationKind {
    pub const ALL: [Self; 4] = [Self::OneTime, Self::Monthly, Self::Quarterly, Self::Yearly];

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::OneTime => "oneTime",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::OneTime => "One-time Donation",
            Self::Monthly => "Monthly Donation",
            Self::Quarterly => "Quarterly Donation",
            Self::Yearly => "Yearly Donation",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|k| k.value() == raw).unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DonationForm {
    pub amount: String,
    pub kind: DonationKind,
    pub name: String,
    pub email: String,
    pub message: String,
    pub anonymous: bool,
}

impl DonationForm {
    #[must_use]
    pub fn with_amount(amount: u64) -> Self {
        Self {
            amount: amount.to_string(),
            kind: DonationKind::default(),
            name: String::new(),
            email: String::new(),
            message: String::new(),
            anonymous: false,
        }
    }

    pub fn choose_quick_amount(&mut self, amount: u64) {
        self.amount = amount.to_string();
    }

    #[must_use]
    pub fn is_quick_amount_selected(&self, amount: u64) -> bool {
        self.amount == amount.to_string()
    }

    /// Label for the submit button.
    #[must_use]
    pub fn submit_label(&self, pending: bool) -> String {
        if pending {
            return "Processing...".to_owned();
        }
        match self.amount.trim().parse::<u64>() {
            Ok(amount) => format!("Donate {}", crate::format::rupees_whole(amount)),
            Err(_) => "Donate".to_owned(),
        }
    }

    /// # Errors
    ///
    /// Invalid amount, missing email, or missing name on a non-anonymous
    /// donation.
    pub fn validate(&self) -> Result<DonationDraft, FormError> {
        let amount = parse_amount(&self.amount)?;
        let name = if self.anonymous { None } else { Some(required(&self.name, "Name")?) };
        let email = email(&self.email)?;
        Ok(DonationDraft { amount, kind: self.kind, name, email, message: optional(&self.message) })
    }
}

impl Default for DonationForm {
    fn default() -> Self {
        Self::with_amount(DEFAULT_DONATION_AMOUNT)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DonationDraft {
    pub amount: u64,
    pub kind: DonationKind,
    /// `None` for anonymous donations.
    pub name: Option<String>,
    pub email: String,
    pub message: Option<String>,
}

// =============================================================================
// SUPPORT REQUEST
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SupportRequestForm {
    pub title: String,
    pub category: Option<RequestCategory>,
    pub description: String,
    pub amount: String,
    pub recipient_name: String,
    pub recipient_relationship: String,
}

impl SupportRequestForm {
    /// Financial requests expose the amount and recipient fields.
    #[must_use]
    pub fn shows_financial_fields(&self) -> bool {
        self.category == Some(RequestCategory::Financial)
    }

    /// # Errors
    ///
    /// Missing title, category, or description; an unparseable target amount
    /// on a financial request.
    pub fn validate(&self) -> Result<SupportRequestDraft, FormError> {
        let title = required(&self.title, "Request title")?;
        let category = self.category.ok_or(FormError::Required("Request type"))?;
        let description = required(&self.description, "Description")?;
        let (target_amount, recipient_name, recipient_relationship) = if self.shows_financial_fields() {
            let amount = if self.amount.trim().is_empty() { None } else { Some(parse_amount(&self.amount)?) };
            (amount, optional(&self.recipient_name), optional(&self.recipient_relationship))
        } else {
            (None, None, None)
        };
        Ok(SupportRequestDraft { title, category, description, target_amount, recipient_name, recipient_relationship })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupportRequestDraft {
    pub title: String,
    pub category: RequestCategory,
    pub description: String,
    pub target_amount: Option<u64>,
    pub recipient_name: Option<String>,
    pub recipient_relationship: Option<String>,
}

// =============================================================================
// FORUM TOPIC / COMMENT
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForumTopicForm {
    pub title: String,
    pub category: Option<ForumCategory>,
    pub content: String,
    pub tags: String,
}

impl ForumTopicForm {
    /// # Errors
    ///
    /// Missing title, category, or content.
    pub fn validate(&self) -> Result<ForumTopicDraft, FormError> {
        Ok(ForumTopicDraft {
            title: required(&self.title, "Topic title")?,
            category: self.category.ok_or(FormError::Required("Category"))?,
            content: required(&self.content, "Content")?,
            tags: parse_tags(&self.tags),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForumTopicDraft {
    pub title: String,
    pub category: ForumCategory,
    pub content: String,
    pub tags: Vec<String>,
}

/// # Errors
///
/// [`FormError::Required`] for blank comments.
pub fn validate_comment(text: &str) -> Result<String, FormError> {
    required(text, "Comment")
}

// =============================================================================
// NOTICES
// =============================================================================

#[must_use]
pub fn donation_notice() -> Notice {
    Notice::success("Thank you for your donation!", "Your donation has been processed successfully.")
}

#[must_use]
pub fn support_request_notice() -> Notice {
    Notice::success(
        "Support request created",
        "Your request has been submitted successfully and is now visible to the community.",
    )
}

#[must_use]
pub fn forum_topic_notice() -> Notice {
    Notice::success("Topic created", "Your forum topic has been created successfully.")
}

#[must_use]
pub fn comment_notice() -> Notice {
    Notice::success("Comment posted", "Your comment has been added successfully.")
}

/// Destructive notice for a rejected form.
#[must_use]
pub fn invalid_form_notice(err: &FormError) -> Notice {
    Notice::error("Error", err.to_string())
}
