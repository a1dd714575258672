use anyhow::Result;
use clap::Subcommand;

use facturo_client::ApiClient;
use facturo_client::users::{CreateUserRequest, UpdateUserRequest};
use facturo_core::UserId;

#[derive(Subcommand)]
pub enum UsersAction {
    /// List users of the active tenant
    List,
    /// Create a user
    Create {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        password: String,

        #[arg(short, long, default_value = "seller")]
        role: String,
    },
    /// Change a user's role
    SetRole {
        id: i64,

        #[arg(short, long)]
        role: String,
    },
    /// Delete a user
    Delete { id: i64 },
}

pub async fn run(client: &ApiClient, action: UsersAction) -> Result<()> {
    match action {
        UsersAction::List => {
            let response = client.list_users().await?;
            for user in &response.users {
                println!("#{:<6} {:<30} {:<25} {}", user.id, user.name, user.email, user.role);
            }
        }
        UsersAction::Create {
            email,
            name,
            password,
            role,
        } => {
            let user = client
                .create_user(&CreateUserRequest {
                    email,
                    name,
                    password,
                    role,
                })
                .await?;
            println!("created user #{} ({})", user.id, user.email);
        }
        UsersAction::SetRole { id, role } => {
            let user = client
                .update_user(
                    UserId::new(id),
                    &UpdateUserRequest {
                        role: Some(role),
                        ..UpdateUserRequest::default()
                    },
                )
                .await?;
            println!("user #{} is now {}", user.id, user.role);
        }
        UsersAction::Delete { id } => {
            client.delete_user(UserId::new(id)).await?;
            println!("deleted user #{id}");
        }
    }
    Ok(())
}
