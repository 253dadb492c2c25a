use uuid::Uuid;

use crate::{
    models::{
        error::{PurchaseError, ReservationError},
        order::{aggregate, AccountId},
        purchase::{PurchaseReceipt, PurchaseRequest},
        ticket::TicketTypeRequest,
    },
    policy::TicketPolicy,
    pricing::{payment_amount, seat_count},
    services::{SeatReservationService, TicketPaymentService},
    validation::validate_with_limit,
};

pub trait TicketService {
    /// Validates the requests, charges the account and reserves the seats.
    ///
    /// Rule violations are reported before either service is called. The
    /// payment and the reservation are two independent calls: if the
    /// reservation fails, the payment stays taken and the error says how much
    /// was charged.
    fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseReceipt, PurchaseError>;

    fn purchase(&self, request: &PurchaseRequest) -> Result<PurchaseReceipt, PurchaseError> {
        self.purchase_tickets(request.account_id, &request.tickets)
    }
}

pub struct TicketServiceImpl<P, S> {
    payment_service: P,
    seat_reservation_service: S,
    policy: TicketPolicy,
}

impl<P, S> TicketServiceImpl<P, S>
where
    P: TicketPaymentService,
    S: SeatReservationService,
{
    pub fn new(payment_service: P, seat_reservation_service: S) -> Self {
        Self::with_policy(payment_service, seat_reservation_service, TicketPolicy::default())
    }

    pub fn with_policy(payment_service: P, seat_reservation_service: S, policy: TicketPolicy) -> Self {
        Self {
            payment_service,
            seat_reservation_service,
            policy,
        }
    }

    pub fn policy(&self) -> &TicketPolicy {
        &self.policy
    }

    fn take_payment(&self, account_id: AccountId, amount: u64) -> Result<(), PurchaseError> {
        log::trace!("taking payment of {amount} from account {account_id}");
        self.payment_service.make_payment(account_id, amount)?;
        Ok(())
    }

    fn reserve_seats(
        &self,
        account_id: AccountId,
        seats: u32,
        charged: u64,
    ) -> Result<(), PurchaseError> {
        log::trace!("reserving {seats} seats for account {account_id}");
        self.seat_reservation_service
            .reserve_seat(account_id, seats)
            .map_err(|source: ReservationError| PurchaseError::Reservation { source, charged })
    }
}

impl<P, S> TicketService for TicketServiceImpl<P, S>
where
    P: TicketPaymentService,
    S: SeatReservationService,
{
    fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseReceipt, PurchaseError> {
        log::trace!("validating {} ticket requests", requests.len());
        validate_with_limit(account_id, requests, self.policy.max_tickets_per_purchase)?;

        let order = aggregate(account_id, requests);
        let amount =
            payment_amount(&order, &self.policy).ok_or(PurchaseError::AmountOverflow)?;
        let seats = seat_count(&order);
        log::debug!("order {order:?} costs {amount} for {seats} seats");

        self.take_payment(account_id, amount)?;
        self.reserve_seats(account_id, seats, amount)?;

        let receipt = PurchaseReceipt {
            purchase_id: Uuid::new_v4(),
            account_id,
            amount,
            seats,
            order,
        };
        log::info!(
            "purchase {} completed for account {account_id}",
            receipt.purchase_id
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        models::error::{InvalidPurchase, PaymentError},
        services::{
            blackhole::Blackhole,
            in_memory::{
                InMemoryPaymentService, InMemorySeatReservationService, Payment, Reservation,
            },
        },
    };

    use super::*;

    fn create_service() -> (
        TicketServiceImpl<InMemoryPaymentService, InMemorySeatReservationService>,
        InMemoryPaymentService,
        InMemorySeatReservationService,
    ) {
        let payments = InMemoryPaymentService::new();
        let seats = InMemorySeatReservationService::new();
        (
            TicketServiceImpl::new(payments.clone(), seats.clone()),
            payments,
            seats,
        )
    }

    fn assert_no_calls(payments: &InMemoryPaymentService, seats: &InMemorySeatReservationService) {
        assert_eq!(0, payments.attempts());
        assert_eq!(0, seats.attempts());
    }

    #[test]
    fn test_invalid_account_id() {
        let (service, payments, seats) = create_service();
        let result = service.purchase_tickets(0, &[TicketTypeRequest::adult(5)]);
        let e = result.unwrap_err();
        assert_eq!(
            "0 is an invalid accountId in TicketTypeRequest",
            e.to_string()
        );
        assert_eq!(Some(&InvalidPurchase::InvalidAccountId(0)), e.invalid_purchase());
        assert_no_calls(&payments, &seats);
    }

    #[test]
    fn test_invalid_account_id_wins_over_other_rules() {
        let (service, payments, seats) = create_service();
        for requests in [
            vec![],
            vec![TicketTypeRequest::child(3)],
            vec![TicketTypeRequest::adult(40)],
        ] {
            let e = service.purchase_tickets(-7, &requests).unwrap_err();
            assert!(matches!(
                e,
                PurchaseError::Invalid(InvalidPurchase::InvalidAccountId(-7))
            ));
        }
        assert_no_calls(&payments, &seats);
    }

    #[test]
    fn test_maximum_ticket_allocation() {
        let (service, payments, seats) = create_service();
        let e = service
            .purchase_tickets(1, &[TicketTypeRequest::adult(21)])
            .unwrap_err();
        assert_eq!(
            "TicketTypeRequest ticket count exceeds max allocation of 20",
            e.to_string()
        );
        assert_no_calls(&payments, &seats);
    }

    #[test]
    fn test_minimum_one_adult() {
        let (service, payments, seats) = create_service();
        let e = service
            .purchase_tickets(1, &[TicketTypeRequest::child(10)])
            .unwrap_err();
        assert_eq!(
            "TicketTypeRequest does not contain minimum 1 adult ticket type",
            e.to_string()
        );

        let e = service.purchase_tickets(1, &[]).unwrap_err();
        assert!(matches!(e, PurchaseError::Invalid(InvalidPurchase::MissingAdult)));
        assert_no_calls(&payments, &seats);
    }

    #[test]
    fn test_successful_purchase() {
        let (service, payments, seats) = create_service();
        let receipt = service
            .purchase_tickets(
                1,
                &[
                    TicketTypeRequest::adult(2),
                    TicketTypeRequest::child(1),
                    TicketTypeRequest::infant(1),
                ],
            )
            .unwrap();

        assert_eq!(50, receipt.amount);
        assert_eq!(3, receipt.seats);
        assert_eq!(1, receipt.account_id);
        assert_eq!(1, receipt.order.infant_count);
        assert_eq!(
            vec![Payment {
                account_id: 1,
                amount: 50
            }],
            payments.payments()
        );
        assert_eq!(
            vec![Reservation {
                account_id: 1,
                seats: 3
            }],
            seats.reservations()
        );
    }

    #[test]
    fn test_totals_for_every_valid_mix() {
        let (service, payments, seats) = create_service();
        let mut expected_payments = vec![];
        let mut expected_reservations = vec![];
        for adults in 1..=20u32 {
            for children in 0..=(20 - adults) {
                let infants = (20 - adults - children).min(adults);
                service
                    .purchase_tickets(
                        7,
                        &[
                            TicketTypeRequest::infant(infants),
                            TicketTypeRequest::child(children),
                            TicketTypeRequest::adult(adults),
                        ],
                    )
                    .unwrap();
                expected_payments.push(Payment {
                    account_id: 7,
                    amount: 20 * u64::from(adults) + 10 * u64::from(children),
                });
                expected_reservations.push(Reservation {
                    account_id: 7,
                    seats: adults + children,
                });
            }
        }
        assert_eq!(expected_payments, payments.payments());
        assert_eq!(expected_reservations, seats.reservations());
    }

    #[test]
    fn test_repeated_types_are_summed() {
        let (service, payments, seats) = create_service();
        service
            .purchase_tickets(
                2,
                &[
                    TicketTypeRequest::adult(1),
                    TicketTypeRequest::child(2),
                    TicketTypeRequest::adult(1),
                ],
            )
            .unwrap();
        assert_eq!(40 + 20, payments.payments()[0].amount);
        assert_eq!(4, seats.reservations()[0].seats);
    }

    #[test]
    fn test_payment_failure_skips_reservation() {
        let payments = InMemoryPaymentService::failing("card declined");
        let seats = InMemorySeatReservationService::new();
        let service = TicketServiceImpl::new(payments.clone(), seats.clone());

        let e = service
            .purchase_tickets(1, &[TicketTypeRequest::adult(1)])
            .unwrap_err();
        assert!(matches!(e, PurchaseError::Payment(PaymentError(_))));
        assert_eq!(1, payments.attempts());
        assert_eq!(0, seats.attempts());
    }

    #[test]
    fn test_reservation_failure_keeps_payment() {
        let payments = InMemoryPaymentService::new();
        let seats = InMemorySeatReservationService::failing("no seats left");
        let service = TicketServiceImpl::new(payments.clone(), seats.clone());

        let e = service
            .purchase_tickets(1, &[TicketTypeRequest::adult(2), TicketTypeRequest::child(1)])
            .unwrap_err();
        match e {
            PurchaseError::Reservation { source, charged } => {
                assert_eq!(ReservationError("no seats left".to_string()), source);
                assert_eq!(50, charged);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(
            vec![Payment {
                account_id: 1,
                amount: 50
            }],
            payments.payments()
        );
        assert_eq!(1, seats.attempts());
    }

    #[test]
    fn test_policy_is_applied() {
        let payments = InMemoryPaymentService::new();
        let policy = TicketPolicy {
            adult_price: 25,
            child_price: 12,
            max_tickets_per_purchase: 4,
        };
        let service = TicketServiceImpl::with_policy(payments.clone(), Blackhole::default(), policy);
        assert_eq!(&policy, service.policy());

        let e = service
            .purchase_tickets(1, &[TicketTypeRequest::adult(5)])
            .unwrap_err();
        assert_eq!(
            "TicketTypeRequest ticket count exceeds max allocation of 4",
            e.to_string()
        );

        service
            .purchase_tickets(1, &[TicketTypeRequest::adult(2), TicketTypeRequest::child(2)])
            .unwrap();
        assert_eq!(74, payments.payments()[0].amount);
    }

    #[test]
    fn test_price_overflow_is_rejected_before_payment() {
        let payments = InMemoryPaymentService::new();
        let seats = InMemorySeatReservationService::new();
        let policy = TicketPolicy::from_json(r#"{"adult_price": 18446744073709551615}"#).unwrap();
        let service = TicketServiceImpl::with_policy(payments.clone(), seats.clone(), policy);

        let e = service
            .purchase_tickets(1, &[TicketTypeRequest::adult(2)])
            .unwrap_err();
        assert!(matches!(e, PurchaseError::AmountOverflow));
        assert_eq!(None, e.invalid_purchase());
        assert_no_calls(&payments, &seats);

        let receipt = service
            .purchase_tickets(1, &[TicketTypeRequest::adult(1)])
            .unwrap();
        assert_eq!(u64::MAX, receipt.amount);
    }

    #[test]
    fn test_purchase_from_json_request() {
        let blackhole = Blackhole::default();
        let service = TicketServiceImpl::new(&blackhole, &blackhole);
        let request = PurchaseRequest::from_json(
            r#"{"account_id":9,"tickets":[{"type":"ADULT","count":1},{"type":"INFANT","count":1}]}"#,
        )
        .unwrap();
        let receipt = service.purchase(&request).unwrap();
        assert_eq!(20, receipt.amount);
        assert_eq!(1, receipt.seats);
    }

    #[test]
    fn test_receipts_are_unique() {
        let service = TicketServiceImpl::new(Blackhole::default(), Blackhole::default());
        let requests = [TicketTypeRequest::adult(1)];
        let first = service.purchase_tickets(1, &requests).unwrap();
        let second = service.purchase_tickets(1, &requests).unwrap();
        assert_ne!(first.purchase_id, second.purchase_id);
    }
}
