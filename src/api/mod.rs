use actix_web::http::header;
use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use sysinfo::Signal;

use crate::state::AppState;
use crate::system::kill::KillOutcome;

const INDEX_HTML: &str = include_str!("index.html");

/// Registers every route. Shared between the server and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/api/stats", web::get().to(stats))
        .route("/kill", web::post().to(kill));
}

async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(header::ContentType::html())
        .body(INDEX_HTML)
}

async fn stats(data: web::Data<AppState>) -> impl Responder {
    let Ok(mut collector) = data.collector.lock() else {
        return HttpResponse::InternalServerError().body("snapshot state unavailable");
    };
    HttpResponse::Ok().json(collector.sample())
}

#[derive(Deserialize)]
struct KillForm {
    pid: String,
}

async fn kill(data: web::Data<AppState>, form: web::Form<KillForm>) -> impl Responder {
    let Ok(pid) = form.pid.parse::<u32>() else {
        log::warn!("rejected kill request with non-numeric pid {:?}", form.pid);
        return HttpResponse::BadRequest().body("invalid pid");
    };

    let Ok(mut collector) = data.collector.lock() else {
        return HttpResponse::InternalServerError().body("snapshot state unavailable");
    };

    match collector.terminate(pid, Signal::Kill) {
        KillOutcome::Terminated(pid, signal) => {
            log::info!("sent {signal} to PID {pid}");
            HttpResponse::SeeOther()
                .insert_header((header::LOCATION, "/"))
                .finish()
        }
        KillOutcome::NotFound(pid) => {
            log::warn!("kill requested for unknown PID {pid}");
            HttpResponse::NotFound().body(format!("no such process: {pid}"))
        }
        KillOutcome::Denied(pid, reason) => {
            log::warn!("kill denied for PID {pid}: {reason}");
            HttpResponse::InternalServerError().body(reason)
        }
    }
}
