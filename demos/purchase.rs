use ticket_purchase::{
    services::{
        in_memory::{InMemoryPaymentService, InMemorySeatReservationService},
        SeatReservationService,
    },
    PurchaseRequest, TicketService, TicketServiceImpl,
};

const REQUESTS: [&str; 4] = [
    r#"{"account_id":1,"tickets":[{"type":"ADULT","count":2},{"type":"CHILD","count":1},{"type":"INFANT","count":1}]}"#,
    r#"{"account_id":0,"tickets":[{"type":"ADULT","count":5}]}"#,
    r#"{"account_id":2,"tickets":[{"type":"CHILD","count":10}]}"#,
    r#"{"account_id":3,"tickets":[{"type":"ADULT","count":21}]}"#,
];

// the seat reservation may fail after the payment went through
fn purchase_with(seats: impl SeatReservationService, payments: &InMemoryPaymentService, json: &str) {
    let service = TicketServiceImpl::new(payments, seats);
    let request = match PurchaseRequest::from_json(json) {
        Ok(r) => r,
        Err(e) => {
            println!("Malformed request {e}");
            return;
        }
    };
    match service.purchase(&request) {
        Ok(receipt) => println!(
            "Purchased {} for account {}: paid {} for {} seats",
            receipt.purchase_id, receipt.account_id, receipt.amount, receipt.seats
        ),
        Err(e) => println!("Purchase for account {} failed: {e}", request.account_id),
    }
}

fn main() {
    env_logger::init();

    let payments = InMemoryPaymentService::new();
    let seats = InMemorySeatReservationService::new();

    for json in REQUESTS {
        if rand::random() {
            purchase_with(seats.clone(), &payments, json);
        } else {
            purchase_with(
                InMemorySeatReservationService::failing("venue fully booked"),
                &payments,
                json,
            );
        }
    }

    println!("Payments taken {:?}", payments.payments());
    println!("Seats reserved {:?}", seats.reservations());
}
