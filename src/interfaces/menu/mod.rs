//! The interactive numbered menu.
//!
//! [`Menu`] reads tokens from any `BufRead`, turns them into [`Command`]s, hands
//! them to [`dispatch`] and writes the rendered replies to any `Write`. Running it
//! over in-memory buffers gives the same transcript as a terminal session.

pub mod input;
pub mod render;

use self::input::TokenReader;
use self::render::{
    render, CHOICE_PROMPT, INVALID_CHOICE, INVALID_NUMBER, MENU, PASSWORD_PROMPT,
    PRODUCT_ID_PROMPT, QUANTITY_PROMPT, USERNAME_PROMPT,
};
use crate::application::command::{dispatch, Command, CommandKind, Reply};
use crate::application::session::CartSession;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::debug;

enum Input<T> {
    Value(T),
    Invalid,
    Closed,
}

pub struct Menu<R: BufRead, W: Write> {
    input: TokenReader<R>,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: TokenReader::new(input),
            output,
        }
    }

    /// Runs until the user picks Exit or the input is exhausted.
    pub fn run(&mut self, session: &mut CartSession) -> io::Result<()> {
        loop {
            self.output.write_all(MENU.as_bytes())?;
            let kind = match self.read_number::<i64>(CHOICE_PROMPT)? {
                Input::Value(choice) => CommandKind::from_choice(choice),
                Input::Invalid => None,
                Input::Closed => break,
            };
            let Some(kind) = kind else {
                writeln!(self.output, "{INVALID_CHOICE}")?;
                continue;
            };

            let command = match self.read_command(kind, session)? {
                Input::Value(command) => command,
                Input::Invalid => {
                    writeln!(self.output, "{INVALID_NUMBER}")?;
                    continue;
                }
                Input::Closed => break,
            };

            let reply = dispatch(session, command);
            render(&mut self.output, &reply)?;
            self.output.flush()?;
            if reply == Reply::Exit {
                return Ok(());
            }
        }

        debug!("input closed, leaving menu");
        self.output.flush()
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }

    /// Prompts only for what the current state can use: a logged-in user is not
    /// asked for credentials and a logged-out user is not asked for a product. The
    /// placeholder arguments in those cases are rejected by the session before
    /// they are inspected.
    fn read_command(
        &mut self,
        kind: CommandKind,
        session: &CartSession,
    ) -> io::Result<Input<Command>> {
        let command = match kind {
            CommandKind::Login if session.is_logged_in() => Command::Login {
                username: String::new(),
                password: String::new(),
            },
            CommandKind::Login => {
                let Some(username) = self.read_token(USERNAME_PROMPT)? else {
                    return Ok(Input::Closed);
                };
                let Some(password) = self.read_token(PASSWORD_PROMPT)? else {
                    return Ok(Input::Closed);
                };
                Command::Login { username, password }
            }
            CommandKind::Logout => Command::Logout,
            CommandKind::ListProducts => Command::ListProducts,
            CommandKind::AddToCart if !session.is_logged_in() => Command::AddToCart {
                product_id: 0,
                quantity: 0,
            },
            CommandKind::AddToCart => {
                let product_id = match self.read_number::<i64>(PRODUCT_ID_PROMPT)? {
                    Input::Value(id) => id,
                    Input::Invalid => return Ok(Input::Invalid),
                    Input::Closed => return Ok(Input::Closed),
                };
                let quantity = match self.read_number::<i32>(QUANTITY_PROMPT)? {
                    Input::Value(quantity) => quantity,
                    Input::Invalid => return Ok(Input::Invalid),
                    Input::Closed => return Ok(Input::Closed),
                };
                Command::AddToCart {
                    product_id,
                    quantity,
                }
            }
            CommandKind::OrderProducts => Command::OrderProducts,
            CommandKind::Exit => Command::Exit,
        };

        Ok(Input::Value(command))
    }

    fn read_token(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.input.next_token()
    }

    fn read_number<T: FromStr>(&mut self, prompt: &str) -> io::Result<Input<T>> {
        Ok(match self.read_token(prompt)? {
            Some(token) => match token.parse() {
                Ok(value) => Input::Value(value),
                Err(_) => {
                    debug!(%token, "not a number");
                    Input::Invalid
                }
            },
            None => Input::Closed,
        })
    }
}
