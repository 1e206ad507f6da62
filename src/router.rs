use crate::api::ApiClient;
use crate::dates::{parse_date, today_local};
use crate::domain::delivery::DeliveryRow;
use crate::domain::logic::derive_order_display_status;
use crate::domain::order::{Material, OrderRow};
use crate::domain::status::OrderStatus;
use crate::errors::ServerError;
use crate::filters::{apply_filters, sort_records, FilterConfig, FilterState, SortKey, SortOrder};
use crate::messages::build_reminder_message;
use crate::responses::{css_response, html_response, redirect_response, text_response, ResultResp};
use crate::spreadsheets::export_orders_xlsx;
use crate::templates::pages::{
    deliveries_page, home_page, orders_page, DeliveriesPageVm, HomeVm, OrdersPageVm,
};
use astra::Request;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::io::Read;

/// How far ahead the WhatsApp reminder looks.
const REMINDER_DAYS_AHEAD: i64 = 7;

pub fn handle(mut req: Request, api: &ApiClient) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let params = parse_query(&req);

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => home_route(api),
        ("GET", "/ordens") => orders_route(api, &params),
        ("GET", "/ordens/exportar") => export_route(api, &params),
        ("GET", "/ordens/lembrete") => reminder_route(api, &params),
        ("POST", "/ordens/status") => update_status_route(&mut req, api),
        ("POST", "/ordens/materiais") => replace_materials_route(&mut req, api),
        ("GET", "/entregas") => deliveries_route(api, &params),
        ("GET", "/static/main.css") => css_response(include_str!("../static/main.css")),
        _ => Err(ServerError::NotFound),
    }
}

fn home_route(api: &ApiClient) -> ResultResp {
    let today = today_local();
    let orders = api.fetch_orders()?;
    let deliveries = api.fetch_deliveries()?;

    let mut vm = HomeVm {
        overdue: 0,
        due_today: 0,
        in_progress: 0,
        open_orders: 0,
        pending_deliveries: 0,
    };
    for order in &orders {
        match derive_order_display_status(order, today) {
            OrderStatus::Atrasada => vm.overdue += 1,
            OrderStatus::ParaHoje => vm.due_today += 1,
            OrderStatus::EmProcesso => vm.in_progress += 1,
            _ => {}
        }
        if !order.status.is_terminal() {
            vm.open_orders += 1;
        }
    }
    vm.pending_deliveries = deliveries
        .iter()
        .filter(|d| !d.status.is_terminal())
        .count();

    html_response(home_page(&vm))
}

fn orders_route(api: &ApiClient, params: &HashMap<String, String>) -> ResultResp {
    let today = today_local();
    let config = filter_config_from_query(params);
    let (rows, total_unfiltered) = load_order_rows(api, &config, today)?;
    html_response(orders_page(&OrdersPageVm {
        rows,
        config,
        total_unfiltered,
    }))
}

fn export_route(api: &ApiClient, params: &HashMap<String, String>) -> ResultResp {
    let today = today_local();
    let config = filter_config_from_query(params);
    let (rows, _) = load_order_rows(api, &config, today)?;
    export_orders_xlsx(&rows, today)
}

fn reminder_route(api: &ApiClient, params: &HashMap<String, String>) -> ResultResp {
    let today = today_local();
    let config = filter_config_from_query(params);
    let (rows, _) = load_order_rows(api, &config, today)?;
    text_response(build_reminder_message(&rows, today, REMINDER_DAYS_AHEAD))
}

fn deliveries_route(api: &ApiClient, params: &HashMap<String, String>) -> ResultResp {
    let today = today_local();
    let config = filter_config_from_query(params);

    let deliveries = api.fetch_deliveries()?;
    let roster = api.fetch_carpenters()?;
    let total_unfiltered = deliveries.len();

    let filtered = apply_filters(&deliveries, &config);
    let sorted = sort_records(&filtered, config.sort_by, config.sort_order, today);
    let rows = DeliveryRow::build(sorted, &roster, today);

    html_response(deliveries_page(&DeliveriesPageVm {
        rows,
        config,
        total_unfiltered,
    }))
}

fn update_status_route(req: &mut Request, api: &ApiClient) -> ResultResp {
    let form = read_form(req)?;
    let id = required_field(&form, "id")?;
    let status = OrderStatus::from_token(field(&form, "status"));
    api.update_order_status(id, &status)?;
    redirect_response("/ordens")
}

fn replace_materials_route(req: &mut Request, api: &ApiClient) -> ResultResp {
    let form = read_form(req)?;
    let id = required_field(&form, "id")?;
    let materials = parse_materials(field(&form, "materiais")).map_err(ServerError::BadRequest)?;
    api.replace_materials(id, &materials)?;
    redirect_response("/ordens")
}

/// Fetch -> derive -> filter -> sort, the pipeline every order view shares.
fn load_order_rows(
    api: &ApiClient,
    config: &FilterConfig,
    today: NaiveDate,
) -> Result<(Vec<OrderRow>, usize), ServerError> {
    let orders = api.fetch_orders()?;
    let roster = api.fetch_carpenters()?;
    let total = orders.len();

    let filtered = apply_filters(&orders, config);
    let sorted = sort_records(&filtered, config.sort_by, config.sort_order, today);
    Ok((OrderRow::build(sorted, &roster, today), total))
}

/// Builds the view's filter configuration from its query string, going
/// through the same pending/apply/clear state the filter form models:
/// `limpar=1` is the immediate clear action, anything else is an apply of
/// whatever the form submitted. Absent fields keep their defaults, unknown
/// sort tokens fall back to the id column.
pub(crate) fn filter_config_from_query(params: &HashMap<String, String>) -> FilterConfig {
    let mut state = FilterState::new();
    if params.contains_key("limpar") {
        return state.clear().clone();
    }

    let cfg = state.pending_mut();
    if let Some(busca) = params.get("busca") {
        cfg.id_search = busca.trim().to_string();
    }
    cfg.entry_from = params.get("entrada_de").and_then(|s| parse_date(s));
    cfg.entry_to = params.get("entrada_ate").and_then(|s| parse_date(s));
    cfg.exit_from = params.get("saida_de").and_then(|s| parse_date(s));
    cfg.exit_to = params.get("saida_ate").and_then(|s| parse_date(s));
    cfg.sort_by = SortKey::from_token(params.get("ordenar").map(String::as_str).unwrap_or(""));
    cfg.sort_order = SortOrder::from_token(params.get("direcao").map(String::as_str).unwrap_or(""));

    state.apply().clone()
}

/// One "descrição;quantidade" pair per line; quantity defaults to 1 when the
/// line has no separator.
pub(crate) fn parse_materials(raw: &str) -> Result<Vec<Material>, String> {
    let mut materials = Vec::new();
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (description, quantity) = match line.split_once(';') {
            Some((description, quantity)) => {
                let quantity: f64 = quantity
                    .trim()
                    .parse()
                    .map_err(|_| format!("quantidade inválida: '{}'", quantity.trim()))?;
                (description.trim(), quantity)
            }
            None => (line, 1.0),
        };
        if description.is_empty() {
            return Err("material sem descrição".to_string());
        }
        materials.push(Material {
            description: description.to_string(),
            quantity,
        });
    }
    Ok(materials)
}

pub(crate) fn parse_query(req: &Request) -> HashMap<String, String> {
    match req.uri().query() {
        Some(raw) => parse_pairs(raw),
        None => HashMap::new(),
    }
}

fn read_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut raw = String::new();
    req.body_mut()
        .reader()
        .read_to_string(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;
    Ok(parse_pairs(&raw))
}

fn parse_pairs(raw: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for pair in raw.split('&') {
        let mut parts = pair.splitn(2, '=');
        if let (Some(k), Some(v)) = (parts.next(), parts.next()) {
            map.insert(url_decode(k), url_decode(v));
        }
    }
    map
}

fn field<'a>(form: &'a HashMap<String, String>, name: &str) -> &'a str {
    form.get(name).map(String::as_str).unwrap_or("")
}

fn required_field<'a>(
    form: &'a HashMap<String, String>,
    name: &str,
) -> Result<&'a str, ServerError> {
    form.get(name)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ServerError::BadRequest(format!("missing field '{name}'")))
}

fn url_decode(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).unwrap_or("");
                match u8::from_str_radix(hex, 16) {
                    Ok(byte) => {
                        out.push(byte);
                        i += 3;
                    }
                    Err(_) => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}
