//! Workspace-level test support: an in-process stand-in for the remote rates
//! API, served by axum on a background thread.
//!
//! Behaviour of the stand-in:
//! - `monto` must parse as a positive number and `plazo_en_dias` as a positive
//!   integer, otherwise 422 with a structured `detail`.
//! - `banco=13` answers 404 with a plain `detail` string.
//! - `banco=7` answers 500 with a non-JSON body.
//! - The `-all` endpoints list three banks, out of alphabetical order, one of
//!   them with a string value.

pub mod stub_api {
    use std::collections::HashMap;
    use std::time::Duration;

    use axum::extract::{Query, Request};
    use axum::http::{header, StatusCode};
    use axum::middleware::{self, Next};
    use axum::response::{IntoResponse, Response};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    type Params = Query<HashMap<String, String>>;

    /// Bank number that does not exist.
    pub const MISSING_BANK: u8 = 13;
    /// Bank number whose lookups crash.
    pub const BROKEN_BANK: u8 = 7;

    pub const ROI_ALL_BODY: &str = r#"{"resultados":{"Zeta":1250.5,"Alfa":980,"Beta":"1100.25"}}"#;
    pub const RATES_ALL_BODY: &str = r#"{"resultados":{"Zeta":9.1,"Alfa":8,"Beta":"8.75"}}"#;

    /// Routes of the stand-in API.
    pub fn router() -> Router {
        Router::new()
            .route("/calcular-roi-all", get(roi_all))
            .route("/calcular-roi", get(roi_single))
            .route("/buscar-tasas-all", get(rates_all))
            .route("/buscar-tasas", get(rates_single))
    }

    /// Bind an ephemeral port and serve [`router`] until the process exits.
    /// Returns the origin, e.g. `http://127.0.0.1:41234`.
    ///
    /// # Panics
    ///
    /// Panics if the port cannot be bound.
    pub fn spawn() -> String {
        serve(router())
    }

    /// Like [`spawn`], but every reply is held back for `delay`.
    pub fn spawn_delayed(delay: Duration) -> String {
        serve(router().layer(middleware::from_fn(move |req: Request, next: Next| async move {
            tokio::time::sleep(delay).await;
            next.run(req).await
        })))
    }

    fn serve(app: Router) -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind stub api");
        listener
            .set_nonblocking(true)
            .expect("non-blocking stub listener");
        let addr = listener.local_addr().expect("stub api address");

        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("stub api runtime");
            runtime.block_on(async move {
                let listener =
                    tokio::net::TcpListener::from_std(listener).expect("tokio stub listener");
                axum::serve(listener, app).await.expect("stub api");
            });
        });

        format!("http://{addr}")
    }

    struct Checked {
        amount: f64,
        amount_raw: String,
        term_days: u32,
    }

    fn validate(params: &HashMap<String, String>) -> Result<Checked, Response> {
        let amount_raw = params.get("monto").cloned().unwrap_or_default();
        let amount = amount_raw.parse::<f64>().ok().filter(|m| *m > 0.0);
        let term_days = params
            .get("plazo_en_dias")
            .and_then(|p| p.parse::<u32>().ok())
            .filter(|p| *p > 0);

        let mut errors = Vec::new();
        if amount.is_none() {
            errors.push("monto: debe ser un número positivo");
        }
        if term_days.is_none() {
            errors.push("plazo_en_dias: debe ser un entero positivo");
        }
        match (amount, term_days) {
            (Some(amount), Some(term_days)) => Ok(Checked {
                amount,
                amount_raw,
                term_days,
            }),
            _ => Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "detail": {
                        "detalle": "Datos de entrada inválidos",
                        "errores": errors,
                    }
                })),
            )
                .into_response()),
        }
    }

    fn bank(params: &HashMap<String, String>) -> Result<u8, Response> {
        let bank = params
            .get("banco")
            .and_then(|b| b.parse::<u8>().ok())
            .unwrap_or(0);
        match bank {
            MISSING_BANK => Err((
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": "Banco no encontrado" })),
            )
                .into_response()),
            BROKEN_BANK => Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()),
            n => Ok(n),
        }
    }

    fn raw_json(body: &'static str) -> Response {
        ([(header::CONTENT_TYPE, "application/json")], body).into_response()
    }

    async fn roi_all(Query(params): Params) -> Response {
        match validate(&params) {
            Ok(_) => raw_json(ROI_ALL_BODY),
            Err(rejection) => rejection,
        }
    }

    async fn rates_all(Query(params): Params) -> Response {
        match validate(&params) {
            Ok(_) => raw_json(RATES_ALL_BODY),
            Err(rejection) => rejection,
        }
    }

    async fn roi_single(Query(params): Params) -> Response {
        let checked = match validate(&params) {
            Ok(checked) => checked,
            Err(rejection) => return rejection,
        };
        match bank(&params) {
            Ok(n) => Json(json!({
                "banco": n,
                "monto": checked.amount_raw,
                "plazo_en_dias": checked.term_days,
                "roi": checked.amount * f64::from(checked.term_days) * 0.0001,
            }))
            .into_response(),
            Err(rejection) => rejection,
        }
    }

    async fn rates_single(Query(params): Params) -> Response {
        let checked = match validate(&params) {
            Ok(checked) => checked,
            Err(rejection) => return rejection,
        };
        match bank(&params) {
            Ok(n) => Json(json!({
                "banco": n,
                "monto": checked.amount_raw,
                "plazo_en_dias": checked.term_days,
                "tasa": 8.0 + f64::from(n) / 4.0,
            }))
            .into_response(),
            Err(rejection) => rejection,
        }
    }
}
