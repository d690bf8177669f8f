use crate::domain::cart::{Cart, CartItem, Receipt};
use crate::domain::catalog::Catalog;
use crate::domain::product::Product;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn,
    AlreadyLoggedIn,
    MissingCredentials,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutOutcome {
    LoggedOut,
    NotLoggedIn,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added { name: String, quantity: i32 },
    NotLoggedIn,
    InvalidProduct(i64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderOutcome {
    Ordered(Receipt),
    NotLoggedIn,
    EmptyCart,
    /// The order total does not fit in a `Decimal`; the cart is left as it was.
    TotalOverflow,
}

/// The single shopping session driven by the menu.
///
/// `CartSession` owns the catalog, the cart and the login flag. Every operation
/// either succeeds or returns a rejection outcome; rejected operations never
/// modify the session.
#[derive(Debug, Clone)]
pub struct CartSession {
    catalog: Catalog,
    cart: Cart,
    logged_in: bool,
}

impl CartSession {
    /// Creates a logged-out session with an empty cart over `catalog`.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            logged_in: false,
        }
    }

    /// Any non-empty credential pair is accepted; nothing is checked against a store.
    pub fn login(&mut self, username: &str, password: &str) -> LoginOutcome {
        if self.logged_in {
            debug!("login rejected: already logged in");
            return LoginOutcome::AlreadyLoggedIn;
        }
        if username.is_empty() || password.is_empty() {
            debug!("login rejected: missing credentials");
            return LoginOutcome::MissingCredentials;
        }

        self.logged_in = true;
        debug!(username, "logged in");
        LoginOutcome::LoggedIn
    }

    /// Leaves the cart untouched.
    pub fn logout(&mut self) -> LogoutOutcome {
        if !self.logged_in {
            debug!("logout rejected: not logged in");
            return LogoutOutcome::NotLoggedIn;
        }

        self.logged_in = false;
        debug!(cart_items = self.cart.len(), "logged out");
        LogoutOutcome::LoggedOut
    }

    pub fn list_products(&self) -> impl Iterator<Item = &Product> {
        self.catalog.iter()
    }

    /// Appends a copy of the matching product. The id is taken as entered, so ids
    /// outside the catalog's `u32` range are simply unknown. The quantity is stored
    /// as entered.
    pub fn add_to_cart(&mut self, product_id: i64, quantity: i32) -> AddOutcome {
        if !self.logged_in {
            debug!(product_id, "add to cart rejected: not logged in");
            return AddOutcome::NotLoggedIn;
        }

        let found = u32::try_from(product_id)
            .ok()
            .and_then(|id| self.catalog.find(id));
        let Some(product) = found else {
            debug!(product_id, "add to cart rejected: unknown product");
            return AddOutcome::InvalidProduct(product_id);
        };

        let name = product.name.clone();
        self.cart.add(CartItem::new(product.clone(), quantity));
        debug!(product_id, quantity, cart_items = self.cart.len(), "added to cart");
        AddOutcome::Added { name, quantity }
    }

    /// Settles the cart into a receipt. The cart is empty afterwards unless the
    /// total overflows, in which case nothing changes.
    pub fn order_products(&mut self) -> OrderOutcome {
        if !self.logged_in {
            debug!("order rejected: not logged in");
            return OrderOutcome::NotLoggedIn;
        }
        if self.cart.is_empty() {
            debug!("order rejected: cart is empty");
            return OrderOutcome::EmptyCart;
        }

        let Some(receipt) = self.cart.settle() else {
            warn!(cart_items = self.cart.len(), "order rejected: total overflows");
            return OrderOutcome::TotalOverflow;
        };
        info!(
            lines = receipt.lines.len(),
            total = %receipt.total.normalize(),
            "order placed"
        );
        OrderOutcome::Ordered(receipt)
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn cart(&self) -> &[CartItem] {
        self.cart.items()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Default for CartSession {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}
