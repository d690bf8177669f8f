use rust_decimal::Decimal;
use shopcart::application::command::{dispatch, Command, Reply};
use shopcart::application::session::{AddOutcome, CartSession, OrderOutcome};

fn commands() -> Vec<Command> {
    vec![
        Command::Login {
            username: "alice".to_string(),
            password: "secret".to_string(),
        },
        Command::Logout,
        Command::ListProducts,
        Command::AddToCart {
            product_id: 1,
            quantity: 4,
        },
        Command::AddToCart {
            product_id: 3,
            quantity: 1,
        },
        Command::AddToCart {
            product_id: 99,
            quantity: 1,
        },
        Command::OrderProducts,
    ]
}

/// Every sequence of `depth` commands drawn from `commands()`.
fn sequences(depth: u32) -> Vec<Vec<Command>> {
    let pool = commands();
    let mut out = vec![Vec::new()];
    for _ in 0..depth {
        out = out
            .into_iter()
            .flat_map(|prefix| {
                pool.iter().map(move |command| {
                    let mut next = prefix.clone();
                    next.push(command.clone());
                    next
                })
            })
            .collect();
    }
    out
}

/// Applies one command and checks the invariants that hold for every transition.
fn step(session: &mut CartSession, command: Command) {
    let was_logged_in = session.is_logged_in();
    let cart_before: Vec<_> = session.cart().to_vec();
    let expected_total: Decimal = cart_before.iter().map(|item| item.subtotal().unwrap()).sum();

    let reply = dispatch(session, command.clone());

    match (command, reply) {
        (Command::AddToCart { quantity, .. }, Reply::AddToCart(AddOutcome::Added { .. })) => {
            assert!(was_logged_in);
            assert_eq!(session.cart().len(), cart_before.len() + 1);
            assert_eq!(session.cart()[..cart_before.len()], cart_before[..]);
            assert_eq!(session.cart().last().map(|i| i.quantity), Some(quantity));
        }
        (Command::AddToCart { .. }, Reply::AddToCart(_)) => {
            assert_eq!(session.cart(), &cart_before[..]);
        }
        (Command::OrderProducts, Reply::Order(OrderOutcome::Ordered(receipt))) => {
            assert!(was_logged_in);
            assert!(!cart_before.is_empty());
            assert_eq!(receipt.total, expected_total);
            assert_eq!(receipt.lines.len(), cart_before.len());
            assert!(session.cart().is_empty());
            assert!(session.is_logged_in());
        }
        (Command::OrderProducts, Reply::Order(_)) => {
            assert_eq!(session.cart(), &cart_before[..]);
            assert_eq!(session.is_logged_in(), was_logged_in);
        }
        (Command::Logout, _) => {
            assert!(!session.is_logged_in());
            assert_eq!(session.cart(), &cart_before[..]);
        }
        (Command::Login { .. }, _) => {
            assert!(session.is_logged_in());
            assert_eq!(session.cart(), &cart_before[..]);
        }
        (Command::ListProducts, Reply::Products(products)) => {
            assert_eq!(products.len(), session.catalog().iter().count());
            assert_eq!(session.cart(), &cart_before[..]);
        }
        (command, reply) => panic!("unexpected reply {reply:?} for {command:?}"),
    }
}

#[test]
fn test_invariants_hold_for_all_short_sequences() {
    for sequence in sequences(4) {
        let mut session = CartSession::default();
        for command in sequence {
            step(&mut session, command);
        }
    }
}

#[test]
fn test_add_while_logged_out_never_grows_cart() {
    let mut session = CartSession::default();
    for product_id in [0, 1, 2, 3, 99] {
        dispatch(
            &mut session,
            Command::AddToCart {
                product_id,
                quantity: 1,
            },
        );
        assert!(session.cart().is_empty());
    }
}
