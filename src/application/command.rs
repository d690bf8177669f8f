use super::session::{AddOutcome, CartSession, LoginOutcome, LogoutOutcome, OrderOutcome};
use crate::domain::product::Product;

/// The menu entries, numbered as they are shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Login,
    Logout,
    ListProducts,
    AddToCart,
    OrderProducts,
    Exit,
}

impl CommandKind {
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::Login),
            2 => Some(Self::Logout),
            3 => Some(Self::ListProducts),
            4 => Some(Self::AddToCart),
            5 => Some(Self::OrderProducts),
            6 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// A fully parsed request against the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { username: String, password: String },
    Logout,
    ListProducts,
    AddToCart { product_id: i64, quantity: i32 },
    OrderProducts,
    Exit,
}

/// What a command produced, ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Login(LoginOutcome),
    Logout(LogoutOutcome),
    Products(Vec<Product>),
    AddToCart(AddOutcome),
    Order(OrderOutcome),
    Exit,
}

/// Applies `command` to `session`. Performs no I/O.
pub fn dispatch(session: &mut CartSession, command: Command) -> Reply {
    match command {
        Command::Login { username, password } => Reply::Login(session.login(&username, &password)),
        Command::Logout => Reply::Logout(session.logout()),
        Command::ListProducts => Reply::Products(session.list_products().cloned().collect()),
        Command::AddToCart {
            product_id,
            quantity,
        } => Reply::AddToCart(session.add_to_cart(product_id, quantity)),
        Command::OrderProducts => Reply::Order(session.order_products()),
        Command::Exit => Reply::Exit,
    }
}
