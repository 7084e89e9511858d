//! Lending gRPC service implementation.
//!
//! Thin translation layer: request fields in, [`LendingService`] call,
//! response message or [`Status`] out.

use biblio_lending::{BookDetails, LendingService, LoanReceipt, ReturnReceipt};
use tonic::{Request, Response, Status};
use tracing::debug;

use crate::error::ServerError;
use crate::proto::{
    lending_service_server::LendingService as LendingRpc, BorrowByIdRequest,
    BorrowByTitleRequest, LoanResponse, QueryRequest, QueryResponse, ReturnRequest,
    ReturnResponse,
};

/// Lending service implementation.
#[derive(Debug, Clone)]
pub struct LendingServiceImpl {
    lending: LendingService,
}

impl LendingServiceImpl {
    /// Create a new lending service.
    pub fn new(lending: LendingService) -> Self {
        LendingServiceImpl { lending }
    }
}

impl From<BookDetails> for QueryResponse {
    fn from(details: BookDetails) -> Self {
        let book = &details.book;
        QueryResponse {
            found: true,
            message: details.message.to_string(),
            isbn: book.isbn().to_string(),
            title: book.title().to_string(),
            author: book.author().to_string(),
            total: book.total(),
            borrowed: book.borrowed(),
            available: book.available(),
        }
    }
}

impl From<LoanReceipt> for LoanResponse {
    fn from(receipt: LoanReceipt) -> Self {
        LoanResponse {
            ok: true,
            message: receipt.message.to_string(),
            due_date: receipt.due_date_string(),
            remaining_available: receipt.remaining_available,
        }
    }
}

impl From<ReturnReceipt> for ReturnResponse {
    fn from(receipt: ReturnReceipt) -> Self {
        ReturnResponse {
            ok: true,
            message: receipt.message.to_string(),
            available: receipt.available,
        }
    }
}

#[tonic::async_trait]
impl LendingRpc for LendingServiceImpl {
    async fn query_by_id(
        &self,
        request: Request<QueryRequest>,
    ) -> Result<Response<QueryResponse>, Status> {
        let req = request.into_inner();
        debug!(isbn = %req.isbn, "QueryById");

        let details = self
            .lending
            .query_by_id(&req.isbn)
            .await
            .map_err(ServerError::from)?;

        Ok(Response::new(details.into()))
    }

    async fn borrow_by_id(
        &self,
        request: Request<BorrowByIdRequest>,
    ) -> Result<Response<LoanResponse>, Status> {
        let req = request.into_inner();
        debug!(isbn = %req.isbn, "BorrowById");

        let receipt = self
            .lending
            .borrow_by_id(&req.isbn)
            .await
            .map_err(ServerError::from)?;

        Ok(Response::new(receipt.into()))
    }

    async fn borrow_by_title(
        &self,
        request: Request<BorrowByTitleRequest>,
    ) -> Result<Response<LoanResponse>, Status> {
        let req = request.into_inner();
        debug!(title = %req.title, "BorrowByTitle");

        let receipt = self
            .lending
            .borrow_by_title(&req.title)
            .await
            .map_err(ServerError::from)?;

        Ok(Response::new(receipt.into()))
    }

    async fn return_by_id(
        &self,
        request: Request<ReturnRequest>,
    ) -> Result<Response<ReturnResponse>, Status> {
        let req = request.into_inner();
        debug!(isbn = %req.isbn, "ReturnById");

        let receipt = self
            .lending
            .return_by_id(&req.isbn)
            .await
            .map_err(ServerError::from)?;

        Ok(Response::new(receipt.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biblio_store::{BookStore, StoreConfig};
    use chrono::NaiveDate;
    use tonic::Code;

    const SAMPLE: &str = "9780134685991|Effective Java|Joshua Bloch|5|2\n\
                          9781492078005|Designing Data|Martin Kleppmann|3|3\n";

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    async fn service() -> (tempfile::TempDir, LendingServiceImpl) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("biblioteca.txt");
        std::fs::write(&path, SAMPLE).unwrap();
        let store = BookStore::open(StoreConfig::new(path)).await.unwrap();
        let lending = LendingService::new(store).with_clock(fixed_today);
        (dir, LendingServiceImpl::new(lending))
    }

    fn isbn(isbn: &str) -> QueryRequest {
        QueryRequest { isbn: isbn.into() }
    }

    #[tokio::test]
    async fn test_query_by_id() {
        let (_dir, svc) = service().await;

        let resp = svc
            .query_by_id(Request::new(isbn("9780134685991")))
            .await
            .unwrap()
            .into_inner();

        assert!(resp.found);
        assert_eq!(resp.message, "Book found.");
        assert_eq!(resp.title, "Effective Java");
        assert_eq!(resp.author, "Joshua Bloch");
        assert_eq!((resp.total, resp.borrowed, resp.available), (5, 2, 3));
    }

    #[tokio::test]
    async fn test_query_unknown_is_not_found() {
        let (_dir, svc) = service().await;

        let status = svc
            .query_by_id(Request::new(isbn("0000000000000")))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::NotFound);
        assert_eq!(status.message(), "No book exists with that ISBN.");
    }

    #[tokio::test]
    async fn test_borrow_and_return() {
        let (_dir, svc) = service().await;

        let loan = svc
            .borrow_by_id(Request::new(BorrowByIdRequest {
                isbn: "9780134685991".into(),
            }))
            .await
            .unwrap()
            .into_inner();
        assert!(loan.ok);
        assert_eq!(loan.message, "Loan registered.");
        assert_eq!(loan.due_date, "2024-05-08");
        assert_eq!(loan.remaining_available, 2);

        let loan = svc
            .borrow_by_title(Request::new(BorrowByTitleRequest {
                title: "effective java".into(),
            }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(loan.remaining_available, 1);

        let returned = svc
            .return_by_id(Request::new(ReturnRequest {
                isbn: "9780134685991".into(),
            }))
            .await
            .unwrap()
            .into_inner();
        assert!(returned.ok);
        assert_eq!(returned.message, "Return registered.");
        assert_eq!(returned.available, 2);
    }

    #[tokio::test]
    async fn test_failures_carry_codes_and_messages() {
        let (_dir, svc) = service().await;

        let status = svc
            .borrow_by_id(Request::new(BorrowByIdRequest {
                isbn: "9781492078005".into(),
            }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::FailedPrecondition);
        assert_eq!(status.message(), "No copies available.");

        let status = svc
            .borrow_by_title(Request::new(BorrowByTitleRequest { title: "  ".into() }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);
        assert_eq!(status.message(), "Title cannot be empty.");

        let status = svc
            .borrow_by_title(Request::new(BorrowByTitleRequest {
                title: "Libro Inexistente".into(),
            }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::NotFound);
        assert_eq!(status.message(), "No book exists with that title.");

        let status = svc
            .return_by_id(Request::new(ReturnRequest { isbn: String::new() }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);
        assert_eq!(status.message(), "ISBN cannot be empty.");
    }
}
