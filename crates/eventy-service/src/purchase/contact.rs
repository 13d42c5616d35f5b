//! Contact info divergence decisions.
//!
//! Pure functions deciding whether a purchase needs a contact snapshot
//! and whether the buyer's consent flag changes. Kept free of any store
//! access so the decision table is testable in isolation.

use eventy_entity::ticket::NewContactInfo;
use eventy_entity::user::User;

/// Contact details submitted with a purchase.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubmittedContact {
    /// Contact name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Terms-of-service agreement flag.
    pub agree_to_terms: bool,
    /// Marketing-consent flag, if the buyer expressed one.
    pub marketing_consent: Option<bool>,
}

/// Decide whether the submitted contact details diverge from the buyer's
/// profile and therefore need a persisted snapshot.
///
/// A snapshot is taken when any of name, email, or phone differ. Name is
/// compared against the profile's "user_name user_surname", email
/// case-insensitively, and a profile without a phone number counts as
/// divergent whenever a phone is submitted.
pub fn divergent_contact(profile: &User, submitted: &SubmittedContact) -> Option<NewContactInfo> {
    let name_differs = submitted.name.trim() != profile.full_name();
    let email_differs = !submitted.email.eq_ignore_ascii_case(&profile.email);
    let phone_differs = match &profile.phone_number {
        Some(phone) => submitted.phone != *phone,
        None => !submitted.phone.is_empty(),
    };

    if name_differs || email_differs || phone_differs {
        Some(NewContactInfo {
            name: submitted.name.clone(),
            email: submitted.email.clone(),
            phone: submitted.phone.clone(),
            agree_to_terms: submitted.agree_to_terms,
            marketing_consent: submitted.marketing_consent,
        })
    } else {
        None
    }
}

/// Decide whether the buyer's profile consent flag must be updated as a
/// side effect of this purchase.
///
/// Returns the new value only when the buyer expressed a preference that
/// differs from the current profile value.
pub fn consent_update(profile: &User, submitted: &SubmittedContact) -> Option<bool> {
    submitted
        .marketing_consent
        .filter(|consent| *consent != profile.marketing_consent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn profile() -> User {
        User {
            id: Uuid::new_v4(),
            user_name: "Ada".to_string(),
            user_surname: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone_number: Some("+3712000000".to_string()),
            marketing_consent: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn matching_contact() -> SubmittedContact {
        SubmittedContact {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+3712000000".to_string(),
            agree_to_terms: true,
            marketing_consent: None,
        }
    }

    #[test]
    fn test_matching_contact_needs_no_snapshot() {
        assert_eq!(divergent_contact(&profile(), &matching_contact()), None);
    }

    #[test]
    fn test_email_comparison_ignores_case() {
        let mut contact = matching_contact();
        contact.email = "Ada@Example.COM".to_string();
        assert_eq!(divergent_contact(&profile(), &contact), None);
    }

    #[test]
    fn test_divergent_name_takes_snapshot() {
        let mut contact = matching_contact();
        contact.name = "A. Byron".to_string();

        let snapshot = divergent_contact(&profile(), &contact).expect("snapshot");
        assert_eq!(snapshot.name, "A. Byron");
        assert_eq!(snapshot.email, "ada@example.com");
    }

    #[test]
    fn test_divergent_phone_takes_snapshot() {
        let mut contact = matching_contact();
        contact.phone = "+3719999999".to_string();
        assert!(divergent_contact(&profile(), &contact).is_some());
    }

    #[test]
    fn test_profile_without_phone_diverges_when_phone_submitted() {
        let mut user = profile();
        user.phone_number = None;
        assert!(divergent_contact(&user, &matching_contact()).is_some());
    }

    #[test]
    fn test_consent_update_only_on_change() {
        let user = profile(); // marketing_consent = false

        let mut contact = matching_contact();
        assert_eq!(consent_update(&user, &contact), None);

        contact.marketing_consent = Some(false);
        assert_eq!(consent_update(&user, &contact), None);

        contact.marketing_consent = Some(true);
        assert_eq!(consent_update(&user, &contact), Some(true));
    }
}
