#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::customers::{NewCustomer, SubscriptionType};
    use crate::errors::Error;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn expiry_follows_the_subscription_cadence() {
        let join = date(2025, 1, 15);
        assert_eq!(
            SubscriptionType::Annual.expiry_from(join),
            date(2026, 1, 15)
        );
        assert_eq!(
            SubscriptionType::SemiAnnual.expiry_from(join),
            date(2025, 7, 15)
        );
        assert_eq!(
            SubscriptionType::Quarterly.expiry_from(join),
            date(2025, 4, 15)
        );
    }

    #[test]
    fn month_end_joins_clamp_to_the_target_month() {
        // Jan 31 + 3 months lands on Apr 30, not an invalid Apr 31.
        assert_eq!(
            SubscriptionType::Quarterly.expiry_from(date(2025, 1, 31)),
            date(2025, 4, 30)
        );
        // A leap-day join expires on Feb 28 of the following year.
        assert_eq!(
            SubscriptionType::Annual.expiry_from(date(2024, 2, 29)),
            date(2025, 2, 28)
        );
    }

    #[test]
    fn renewal_adds_a_year_to_the_current_expiry() {
        use crate::customers::Customer;
        use chrono::Utc;

        let now = Utc::now();
        let customer = Customer {
            id: "cus-1".to_string(),
            name: "Blue Fig Cafe".to_string(),
            join_date: date(2024, 6, 1),
            subscription_type: SubscriptionType::Quarterly,
            expiry_date: date(2024, 9, 1),
            is_active: false,
            created_at: now,
            updated_at: now,
        };

        assert_eq!(customer.renewed_expiry(), date(2025, 9, 1));

        let note = customer.renewed_activity();
        assert_eq!(note.activity_type, "subscription_renewed");
        assert_eq!(note.related_id.as_deref(), Some("cus-1"));
    }

    #[test]
    fn subscription_type_round_trips_through_its_string_form() {
        for sub in [
            SubscriptionType::Annual,
            SubscriptionType::SemiAnnual,
            SubscriptionType::Quarterly,
        ] {
            assert_eq!(sub.as_str().parse::<SubscriptionType>().unwrap(), sub);
        }
        assert!("weekly".parse::<SubscriptionType>().is_err());
    }

    #[test]
    fn a_customer_needs_a_name() {
        let new_customer = NewCustomer {
            name: "  ".to_string(),
            join_date: date(2025, 3, 1),
            subscription_type: SubscriptionType::Annual,
        };
        assert!(matches!(
            new_customer.validate(),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn created_activity_names_the_customer() {
        let new_customer = NewCustomer {
            name: "Blue Fig Cafe".to_string(),
            join_date: date(2025, 3, 1),
            subscription_type: SubscriptionType::Annual,
        };
        let activity = new_customer.created_activity();
        assert_eq!(activity.activity_type, "customer_added");
        assert!(activity.description.contains("Blue Fig Cafe"));
    }
}
