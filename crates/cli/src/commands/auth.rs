use anyhow::Result;

use facturo_client::ApiClient;
use facturo_client::auth::LoginRequest;

pub async fn login(client: &ApiClient, email: String, password: String) -> Result<()> {
    let response = client
        .login(&LoginRequest {
            email,
            password,
            tenant_id: None,
        })
        .await?;

    println!(
        "Logged in as {} ({}) on tenant {} ({})",
        response.user.name, response.user.role, response.tenant.name, response.tenant.id
    );
    println!();
    println!("export FACTURO_TOKEN={}", response.token);
    println!("export FACTURO_TENANT_ID={}", response.tenant.id);
    Ok(())
}

pub async fn whoami(client: &ApiClient) -> Result<()> {
    let user = client.me().await?;
    println!("#{} {} <{}> ({})", user.id, user.name, user.email, user.role);
    Ok(())
}

pub async fn logout(client: &ApiClient) -> Result<()> {
    client.logout().await?;
    println!("logged out; drop FACTURO_TOKEN from your environment");
    Ok(())
}
