use super::store::load_admin_credentials;
use crate::{
    error::EduRemindError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use edu_remind_api_structs::login::*;
use edu_remind_infra::EduRemindContext;

fn handle_error(e: UseCaseErrors) -> EduRemindError {
    match e {
        UseCaseErrors::InvalidCredentials => {
            EduRemindError::Unauthorized("Invalid username or password".into())
        }
    }
}

pub async fn login_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<EduRemindContext>,
) -> Result<HttpResponse, EduRemindError> {
    let body = body.0;
    let usecase = LoginUseCase {
        username: body.username,
        password: body.password,
    };

    execute(usecase, &ctx)
        .await
        .map(|username| HttpResponse::Ok().json(APIResponse { username }))
        .map_err(handle_error)
}

/// Plain comparison against the stored credentials. No session is issued.
pub struct LoginUseCase {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginUseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginUseCase")
            .field("username", &self.username)
            .finish()
    }
}

#[derive(Debug, PartialEq)]
pub enum UseCaseErrors {
    InvalidCredentials,
}

#[async_trait::async_trait(?Send)]
impl UseCase for LoginUseCase {
    type Response = String;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "Login";

    async fn execute(&mut self, ctx: &EduRemindContext) -> Result<Self::Response, Self::Errors> {
        let creds = load_admin_credentials(ctx).await;
        if creds.verify(&self.username, &self.password) {
            Ok(creds.username)
        } else {
            Err(UseCaseErrors::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::settings::store::store_admin_credentials;
    use edu_remind_domain::AdminCredentials;

    fn usecase(username: &str, password: &str) -> LoginUseCase {
        LoginUseCase {
            username: username.into(),
            password: password.into(),
        }
    }

    #[actix_web::test]
    async fn default_credentials_log_in() {
        let ctx = EduRemindContext::create_inmemory();
        assert_eq!(
            usecase("admin", "admin123").execute(&ctx).await,
            Ok("admin".to_string())
        );
        assert_eq!(
            usecase("admin", "wrong").execute(&ctx).await,
            Err(UseCaseErrors::InvalidCredentials)
        );
    }

    #[actix_web::test]
    async fn stored_credentials_replace_the_defaults() {
        let ctx = EduRemindContext::create_inmemory();
        store_admin_credentials(
            &AdminCredentials {
                username: "placement".into(),
                password: "s3cret".into(),
            },
            &ctx,
        )
        .await
        .unwrap();

        assert!(usecase("admin", "admin123").execute(&ctx).await.is_err());
        assert!(usecase("placement", "s3cret").execute(&ctx).await.is_ok());
    }
}
