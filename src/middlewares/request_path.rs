//! 에러 응답 본문에 요청 경로를 채웁니다.

use actix_web::dev::ServiceResponse;
use actix_web::middleware::ErrorHandlerResponse;

use crate::errors::AppError;

/// `AppError`로 끝난 응답을 `path`가 포함된 본문으로 바꿉니다.
///
/// `AppError`가 아닌 에러(라우팅 404 등)는 그대로 통과시킵니다.
pub fn attach_request_path<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let replaced = res
        .response()
        .error()
        .and_then(|e| e.as_error::<AppError>())
        .map(|e| e.response_with_path(res.request().path()));

    match replaced {
        Some(response) => {
            let (req, _) = res.into_parts();
            Ok(ErrorHandlerResponse::Response(
                ServiceResponse::new(req, response).map_into_right_body(),
            ))
        }
        None => Ok(ErrorHandlerResponse::Response(res.map_into_left_body())),
    }
}
