use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum APIErrorVariant {
    Network,
    MalformedResponse,
    BadClientData,
    Unauthorized,
    NotFound,
    Conflict,
    EmptyImport,
    UnexpectedStatusCode,
}

#[derive(Debug)]
pub struct APIError {
    pub variant: APIErrorVariant,
    pub message: String,
}

pub type APIResponse<T> = Result<T, APIError>;

pub(crate) struct BaseClient {
    client: Client,
    address: String,
    api_prefix: &'static str,
}

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            client: Client::new(),
            address,
            api_prefix: "/api/v1/",
        }
    }

    fn get_client(&self, method: Method, path: String) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}{}", self.address, self.api_prefix, path))
    }

    async fn send(&self, builder: RequestBuilder) -> APIResponse<Response> {
        builder.send().await.map_err(|e| APIError {
            variant: APIErrorVariant::Network,
            message: e.to_string(),
        })
    }

    async fn check_status(res: Response, expected_status_code: StatusCode) -> APIResponse<Response> {
        let status = res.status();
        if status == expected_status_code {
            return Ok(res);
        }
        let variant = match status {
            StatusCode::BAD_REQUEST => APIErrorVariant::BadClientData,
            StatusCode::UNAUTHORIZED => APIErrorVariant::Unauthorized,
            StatusCode::NOT_FOUND => APIErrorVariant::NotFound,
            StatusCode::CONFLICT => APIErrorVariant::Conflict,
            StatusCode::UNPROCESSABLE_ENTITY => APIErrorVariant::EmptyImport,
            _ => APIErrorVariant::UnexpectedStatusCode,
        };
        Err(APIError {
            variant,
            message: res.text().await.unwrap_or_default(),
        })
    }

    async fn handle_api_response<T: DeserializeOwned>(
        &self,
        res: Response,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = Self::check_status(res, expected_status_code).await?;
        res.json::<T>().await.map_err(|e| APIError {
            variant: APIErrorVariant::MalformedResponse,
            message: e.to_string(),
        })
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.send(self.get_client(Method::GET, path)).await?;
        self.handle_api_response(res, expected_status_code).await
    }

    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: String,
        query: &Q,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .send(self.get_client(Method::GET, path).query(query))
            .await?;
        self.handle_api_response(res, expected_status_code).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.send(self.get_client(Method::DELETE, path)).await?;
        self.handle_api_response(res, expected_status_code).await
    }

    pub async fn post<T: DeserializeOwned, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .send(self.get_client(Method::POST, path).json(&body))
            .await?;
        self.handle_api_response(res, expected_status_code).await
    }

    pub async fn put<T: DeserializeOwned, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .send(self.get_client(Method::PUT, path).json(&body))
            .await?;
        self.handle_api_response(res, expected_status_code).await
    }

    /// Sends `bytes` as the raw request body
    pub async fn post_bytes<T: DeserializeOwned, Q: Serialize>(
        &self,
        bytes: Vec<u8>,
        path: String,
        query: &Q,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .send(
                self.get_client(Method::POST, path)
                    .query(query)
                    .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
                    .body(bytes),
            )
            .await?;
        self.handle_api_response(res, expected_status_code).await
    }

    /// Reads the raw response body
    pub async fn get_bytes(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<Vec<u8>> {
        let res = self.send(self.get_client(Method::GET, path)).await?;
        let res = Self::check_status(res, expected_status_code).await?;
        res.bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|e| APIError {
                variant: APIErrorVariant::MalformedResponse,
                message: e.to_string(),
            })
    }
}
