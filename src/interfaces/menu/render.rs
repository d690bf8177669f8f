use crate::application::command::Reply;
use crate::application::session::{AddOutcome, LoginOutcome, LogoutOutcome, OrderOutcome};
use crate::domain::cart::Receipt;
use std::io::{self, Write};

pub const MENU: &str = "\nMenu:\n\
    1. Login\n\
    2. Logout\n\
    3. List Products\n\
    4. Add to Cart\n\
    5. Order Products\n\
    6. Exit\n";

pub const CHOICE_PROMPT: &str = "Enter your choice: ";
pub const USERNAME_PROMPT: &str = "Enter username: ";
pub const PASSWORD_PROMPT: &str = "Enter password: ";
pub const PRODUCT_ID_PROMPT: &str = "Enter product ID to add to cart: ";
pub const QUANTITY_PROMPT: &str = "Enter quantity: ";

pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
pub const INVALID_NUMBER: &str = "Invalid number. Please try again.";

/// Writes the user-facing text for `reply`.
pub fn render<W: Write>(out: &mut W, reply: &Reply) -> io::Result<()> {
    match reply {
        Reply::Login(outcome) => writeln!(
            out,
            "{}",
            match outcome {
                LoginOutcome::LoggedIn => "Login successful.",
                LoginOutcome::AlreadyLoggedIn => "You are already logged in.",
                LoginOutcome::MissingCredentials => "Username and password are required.",
            }
        ),
        Reply::Logout(outcome) => writeln!(
            out,
            "{}",
            match outcome {
                LogoutOutcome::LoggedOut => "Logout successful.",
                LogoutOutcome::NotLoggedIn => "You are not logged in.",
            }
        ),
        Reply::Products(products) => {
            writeln!(out, "Available products:")?;
            for product in products {
                writeln!(out, "{}. {} - ${}", product.id, product.name, product.price)?;
            }
            Ok(())
        }
        Reply::AddToCart(outcome) => match outcome {
            AddOutcome::Added { name, quantity } => {
                writeln!(out, "{quantity} x {name} added to cart.")
            }
            AddOutcome::NotLoggedIn => writeln!(out, "Please login first."),
            AddOutcome::InvalidProduct(_) => writeln!(out, "Invalid product ID."),
        },
        Reply::Order(outcome) => match outcome {
            OrderOutcome::Ordered(receipt) => render_receipt(out, receipt),
            OrderOutcome::NotLoggedIn => writeln!(out, "Please login first."),
            OrderOutcome::EmptyCart => writeln!(out, "Your cart is empty."),
            OrderOutcome::TotalOverflow => {
                writeln!(out, "Order total is too large to process.")
            }
        },
        Reply::Exit => writeln!(out, "Exiting the system. Goodbye!"),
    }
}

fn render_receipt<W: Write>(out: &mut W, receipt: &Receipt) -> io::Result<()> {
    writeln!(out, "Order summary:")?;
    for line in &receipt.lines {
        writeln!(
            out,
            "{} x {} - ${}",
            line.quantity,
            line.name,
            line.subtotal.normalize()
        )?;
    }
    writeln!(out, "Total price: ${}", receipt.total.normalize())?;
    writeln!(out, "Thank you for your order!")
}
