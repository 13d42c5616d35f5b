//! User profile management and buyer ticket history.

use std::sync::Arc;

use uuid::Uuid;

use eventy_core::error::AppError;
use eventy_core::result::AppResult;
use eventy_database::repositories::{SoldTicketRepository, UserRepository};
use eventy_entity::ticket::BuyerTicket;
use eventy_entity::user::{CreateUser, User};

/// User profile service.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    users: Arc<UserRepository>,
    /// Sale record repository (ticket history).
    sold_tickets: Arc<SoldTicketRepository>,
}

impl UserService {
    /// Create a new user service.
    pub fn new(users: Arc<UserRepository>, sold_tickets: Arc<SoldTicketRepository>) -> Self {
        Self {
            users,
            sold_tickets,
        }
    }

    /// Create a user profile. The email must be unused.
    pub async fn create_user(&self, data: CreateUser) -> AppResult<User> {
        if self.users.find_by_email(&data.email).await?.is_some() {
            return Err(AppError::conflict("A user with this email already exists"));
        }
        self.users.create(&data).await
    }

    /// Fetch a user profile.
    pub async fn get_user(&self, user_id: Uuid) -> AppResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// List a buyer's purchased tickets, newest first.
    pub async fn user_tickets(&self, user_id: Uuid) -> AppResult<Vec<BuyerTicket>> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        self.sold_tickets.find_by_buyer(user_id).await
    }
}
