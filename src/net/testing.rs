//! Scripted `AuthClient` for flow tests.

use std::cell::RefCell;

use super::api::AuthClient;
use super::error::AuthError;
use super::types::{AuthResponse, SignInRequest, SignUpRequest};

/// Replays one canned result per call and records every request it sees.
#[derive(Debug)]
pub struct FakeAuthClient {
    reply: Result<AuthResponse, AuthError>,
    pub sign_ups: RefCell<Vec<SignUpRequest>>,
    pub sign_ins: RefCell<Vec<SignInRequest>>,
}

impl FakeAuthClient {
    pub fn succeeding(token: &str) -> Self {
        Self::replying(Ok(AuthResponse::with_token(token)))
    }

    pub fn failing(err: AuthError) -> Self {
        Self::replying(Err(err))
    }

    fn replying(reply: Result<AuthResponse, AuthError>) -> Self {
        Self {
            reply,
            sign_ups: RefCell::default(),
            sign_ins: RefCell::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.sign_ups.borrow().len() + self.sign_ins.borrow().len()
    }
}

impl AuthClient for FakeAuthClient {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthResponse, AuthError> {
        self.sign_ups.borrow_mut().push(request.clone());
        self.reply.clone()
    }

    async fn sign_in(&self, request: &SignInRequest) -> Result<AuthResponse, AuthError> {
        self.sign_ins.borrow_mut().push(request.clone());
        self.reply.clone()
    }
}
