//! Handlers for the tenant analysis workflow.

use actix_multipart::form::MultipartForm;
use actix_web::http::header;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::cache::QueryCache;
use crate::forms::tenant_analysis::{AnalysisRequestForm, UploadAnalysisDocumentForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::routes::{
    base_context, parse_filter_code, redirect, render_template, service_error_response,
};
use crate::services::ServiceError;
use crate::services::tenant_analysis as analysis_service;

#[derive(Deserialize)]
struct AnalysesQueryParams {
    status: Option<String>,
}

#[get("/agency/analyses")]
pub async fn analyses(
    params: web::Query<AnalysesQueryParams>,
    user: AuthenticatedUser,
    api: web::Data<ApiClient>,
    cache: web::Data<QueryCache>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let status = parse_filter_code(params.status.as_deref());

    match analysis_service::load_analyses_page(api.get_ref(), cache.get_ref(), &user, status).await
    {
        Ok(data) => {
            let mut context = base_context(&user, &flash_messages, "analyses", &server_config);
            context.insert("analyses", &data);
            render_template(&tera, "tenant_analysis/index.html", &context)
        }
        Err(err) => service_error_response(err),
    }
}

#[get("/agency/analyses/{analysis_id}")]
pub async fn show_analysis(
    analysis_id: web::Path<Uuid>,
    user: AuthenticatedUser,
    api: web::Data<ApiClient>,
    tera: web::Data<Tera>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match analysis_service::show_analysis(api.get_ref(), &user, analysis_id.into_inner()).await {
        Ok(row) => {
            let mut context = base_context(&user, &flash_messages, "analyses", &server_config);
            context.insert("analysis", &row);
            render_template(&tera, "tenant_analysis/show.html", &context)
        }
        Err(err) => service_error_response(err),
    }
}

#[post("/agency/analyses")]
pub async fn submit_analysis(
    web::Form(form): web::Form<AnalysisRequestForm>,
    user: AuthenticatedUser,
    api: web::Data<ApiClient>,
    cache: web::Data<QueryCache>,
) -> impl Responder {
    match analysis_service::submit_analysis(api.get_ref(), cache.get_ref(), &user, form).await {
        Ok(created) => {
            FlashMessage::success("Analysis request submitted.").send();
            redirect(&format!("/agency/analyses/{}", created.id))
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/agency/analyses")
        }
        Err(err) => service_error_response(err),
    }
}

#[post("/agency/analyses/{analysis_id}/documents")]
pub async fn upload_document(
    analysis_id: web::Path<Uuid>,
    MultipartForm(mut form): MultipartForm<UploadAnalysisDocumentForm>,
    user: AuthenticatedUser,
    api: web::Data<ApiClient>,
) -> impl Responder {
    let analysis_id = analysis_id.into_inner();

    let (file_name, content_type, bytes) = match form.read() {
        Ok(parts) => parts,
        Err(err) => {
            log::error!("Failed to read uploaded document: {err}");
            FlashMessage::error("The uploaded file could not be read.").send();
            return redirect(&format!("/agency/analyses/{analysis_id}"));
        }
    };

    match analysis_service::upload_document(
        api.get_ref(),
        &user,
        analysis_id,
        file_name,
        content_type,
        bytes,
    )
    .await
    {
        Ok(()) => {
            FlashMessage::success("Document attached.").send();
            redirect(&format!("/agency/analyses/{analysis_id}"))
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(&format!("/agency/analyses/{analysis_id}"))
        }
        Err(err) => service_error_response(err),
    }
}

/// Binary passthrough of the finished analysis report.
#[get("/agency/analyses/{analysis_id}/report")]
pub async fn download_report(
    analysis_id: web::Path<Uuid>,
    user: AuthenticatedUser,
    api: web::Data<ApiClient>,
) -> impl Responder {
    let analysis_id = analysis_id.into_inner();
    match analysis_service::download_report(api.get_ref(), &user, analysis_id).await {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"analysis_{analysis_id}.pdf\""),
            ))
            .body(bytes),
        Err(err) => service_error_response(err),
    }
}
