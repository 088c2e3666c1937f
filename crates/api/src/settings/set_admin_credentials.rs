use super::store::store_admin_credentials;
use crate::{
    error::EduRemindError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use edu_remind_api_structs::set_admin_credentials::*;
use edu_remind_domain::AdminCredentials;
use edu_remind_infra::EduRemindContext;

fn handle_error(e: UseCaseErrors) -> EduRemindError {
    match e {
        UseCaseErrors::Incomplete => {
            EduRemindError::BadClientData("Username and password can not be empty".into())
        }
        UseCaseErrors::StorageError => EduRemindError::InternalError,
    }
}

pub async fn set_admin_credentials_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<EduRemindContext>,
) -> Result<HttpResponse, EduRemindError> {
    let body = body.0;
    let usecase = SetAdminCredentialsUseCase {
        creds: AdminCredentials {
            username: body.username.trim().to_string(),
            password: body.password,
        },
    };

    execute(usecase, &ctx)
        .await
        .map(|username| HttpResponse::Ok().json(APIResponse { username }))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct SetAdminCredentialsUseCase {
    pub creds: AdminCredentials,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseErrors {
    Incomplete,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetAdminCredentialsUseCase {
    /// The stored username
    type Response = String;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "SetAdminCredentials";

    async fn execute(&mut self, ctx: &EduRemindContext) -> Result<Self::Response, Self::Errors> {
        if !self.creds.is_complete() {
            return Err(UseCaseErrors::Incomplete);
        }
        store_admin_credentials(&self.creds, ctx)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        Ok(self.creds.username.clone())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::settings::store::load_admin_credentials;

    #[actix_web::test]
    async fn rejects_incomplete_credentials() {
        let ctx = EduRemindContext::create_inmemory();
        let mut usecase = SetAdminCredentialsUseCase {
            creds: AdminCredentials {
                username: "placement".into(),
                password: "".into(),
            },
        };
        assert_eq!(usecase.execute(&ctx).await, Err(UseCaseErrors::Incomplete));
        assert_eq!(load_admin_credentials(&ctx).await, AdminCredentials::default());
    }

    #[actix_web::test]
    async fn replaces_the_credentials() {
        let ctx = EduRemindContext::create_inmemory();
        let creds = AdminCredentials {
            username: "placement".into(),
            password: "s3cret".into(),
        };
        let mut usecase = SetAdminCredentialsUseCase {
            creds: creds.clone(),
        };
        assert_eq!(usecase.execute(&ctx).await, Ok("placement".to_string()));
        assert_eq!(load_admin_credentials(&ctx).await, creds);
    }
}
