#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::errors::Error;
    use crate::receivables::{NewReceivable, Receivable, ReceivableError, ReceivableStatus};

    fn receivable(total: Decimal, paid: Decimal) -> Receivable {
        let remaining = total - paid;
        let now = Utc::now();
        Receivable {
            id: "rcv-1".to_string(),
            customer_id: None,
            income_entry_id: Some("inc-1".to_string()),
            total_amount: total,
            paid_amount: paid,
            remaining_amount: remaining,
            status: ReceivableStatus::from_balances(paid, remaining),
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn assert_balanced(r: &Receivable) {
        assert_eq!(r.paid_amount + r.remaining_amount, r.total_amount);
        assert!(r.remaining_amount >= Decimal::ZERO);
        assert!(r.paid_amount >= Decimal::ZERO);
        assert_eq!(
            r.status,
            ReceivableStatus::from_balances(r.paid_amount, r.remaining_amount)
        );
    }

    #[test]
    fn deposit_opens_partial_receivable() {
        let new = NewReceivable::from_deposit(
            None,
            Some("inc-1".to_string()),
            dec!(30000),
            Some(dec!(100000)),
            None,
        )
        .unwrap();

        assert_eq!(new.paid_amount, dec!(30000));
        assert_eq!(new.remaining_amount, dec!(70000));
        assert_eq!(new.status, ReceivableStatus::Partial);
    }

    #[test]
    fn full_payment_at_sale_time_opens_paid_receivable() {
        let new =
            NewReceivable::from_deposit(None, None, dec!(100000), Some(dec!(100000)), None)
                .unwrap();

        assert_eq!(new.remaining_amount, Decimal::ZERO);
        assert_eq!(new.status, ReceivableStatus::Paid);
    }

    #[test]
    fn deposit_without_total_is_rejected() {
        let result = NewReceivable::from_deposit(None, None, dec!(30000), None, None);
        assert!(matches!(
            result,
            Err(Error::Receivable(ReceivableError::InvalidDeposit(_)))
        ));
    }

    #[test]
    fn deposit_collecting_more_than_total_is_rejected() {
        let result =
            NewReceivable::from_deposit(None, None, dec!(60000), Some(dec!(50000)), None);
        assert!(matches!(
            result,
            Err(Error::Receivable(ReceivableError::InvalidDeposit(_)))
        ));
    }

    #[test]
    fn negative_collected_amount_is_rejected() {
        let result =
            NewReceivable::from_deposit(None, None, dec!(-1), Some(dec!(50000)), None);
        assert!(matches!(
            result,
            Err(Error::Receivable(ReceivableError::InvalidDeposit(_)))
        ));
    }

    #[test]
    fn settle_reduces_remaining_and_keeps_the_books_balanced() {
        let r = receivable(dec!(100000), dec!(30000));
        let settled = r.settle(dec!(20000), Utc::now()).unwrap();

        assert_eq!(settled.paid_amount, dec!(50000));
        assert_eq!(settled.remaining_amount, dec!(50000));
        assert_eq!(settled.status, ReceivableStatus::Partial);
        assert_balanced(&settled);
    }

    #[test]
    fn settling_the_exact_remainder_closes_the_receivable() {
        let r = receivable(dec!(100000), dec!(30000));
        let settled = r.settle(dec!(70000), Utc::now()).unwrap();

        assert_eq!(settled.paid_amount, dec!(100000));
        assert_eq!(settled.remaining_amount, Decimal::ZERO);
        assert_eq!(settled.status, ReceivableStatus::Paid);
        assert_balanced(&settled);
    }

    #[test]
    fn overpayment_is_rejected_in_full() {
        let r = receivable(dec!(100000), dec!(30000));
        let result = r.settle(dec!(70001), Utc::now());

        assert!(matches!(
            result,
            Err(Error::Receivable(ReceivableError::Overpayment { attempted, remaining }))
                if attempted == dec!(70001) && remaining == dec!(70000)
        ));
        // The source receivable is untouched.
        assert_eq!(r.paid_amount, dec!(30000));
        assert_balanced(&r);
    }

    #[test]
    fn a_settled_receivable_rejects_any_further_payment() {
        let r = receivable(dec!(100000), dec!(100000));
        assert_eq!(r.status, ReceivableStatus::Paid);

        let result = r.settle(dec!(1), Utc::now());
        assert!(matches!(
            result,
            Err(Error::Receivable(ReceivableError::Overpayment { .. }))
        ));
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        let r = receivable(dec!(100000), dec!(30000));

        for amount in [Decimal::ZERO, dec!(-5)] {
            let result = r.settle(amount, Utc::now());
            assert!(matches!(
                result,
                Err(Error::Receivable(ReceivableError::InvalidAmount(_)))
            ));
        }
    }

    #[test]
    fn paid_amount_grows_monotonically_over_a_payment_sequence() {
        let mut r = receivable(dec!(1000), dec!(100));
        let mut previous_paid = r.paid_amount;

        for amount in [dec!(50), dec!(200), dec!(0.5), dec!(649.5)] {
            r = r.settle(amount, Utc::now()).unwrap();
            assert!(r.paid_amount > previous_paid);
            assert_balanced(&r);
            previous_paid = r.paid_amount;
        }

        assert_eq!(r.status, ReceivableStatus::Paid);
        assert_eq!(r.remaining_amount, Decimal::ZERO);
    }

    #[test]
    fn fractional_amounts_settle_without_rounding_drift() {
        let r = receivable(dec!(0.30), dec!(0.10));
        let settled = r.settle(dec!(0.20), Utc::now()).unwrap();

        // Exact decimal equality, no epsilon.
        assert_eq!(settled.paid_amount, dec!(0.30));
        assert_eq!(settled.remaining_amount, dec!(0.00));
        assert_eq!(settled.status, ReceivableStatus::Paid);
    }

    #[test]
    fn status_follows_balances() {
        assert_eq!(
            ReceivableStatus::from_balances(Decimal::ZERO, dec!(10)),
            ReceivableStatus::Pending
        );
        assert_eq!(
            ReceivableStatus::from_balances(dec!(4), dec!(6)),
            ReceivableStatus::Partial
        );
        assert_eq!(
            ReceivableStatus::from_balances(dec!(10), Decimal::ZERO),
            ReceivableStatus::Paid
        );
    }

    #[test]
    fn status_round_trips_through_its_string_form() {
        for status in [
            ReceivableStatus::Pending,
            ReceivableStatus::Partial,
            ReceivableStatus::Paid,
        ] {
            assert_eq!(status.as_str().parse::<ReceivableStatus>().unwrap(), status);
        }
        assert!("overdue".parse::<ReceivableStatus>().is_err());
    }

    #[test]
    fn audit_notes_carry_the_amounts_and_related_ids() {
        let new = NewReceivable::from_deposit(
            None,
            Some("inc-7".to_string()),
            dec!(30000),
            Some(dec!(100000)),
            None,
        )
        .unwrap();
        let opened = new.opened_activity();
        assert_eq!(opened.activity_type, "receivable_added");
        assert_eq!(opened.related_id.as_deref(), Some("inc-7"));
        assert!(opened.description.contains("100000"));
        assert!(opened.description.contains("70000"));

        let r = receivable(dec!(100000), dec!(30000));
        let settled = r.settle(dec!(20000), Utc::now()).unwrap();
        let note = settled.payment_activity(dec!(20000));
        assert_eq!(note.activity_type, "payment_received");
        assert_eq!(note.related_id.as_deref(), Some("rcv-1"));
        assert!(note.description.contains("20000"));
        assert!(note.description.contains("50000"));
    }
}
