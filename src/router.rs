use crate::app::App;
use crate::domain::booking::{Stay, StayQuote};
use crate::domain::gallery::listing_gallery;
use crate::domain::{resolve, Category, ClassicCriteria, FilterSelection, Listing};
use crate::errors::ServerError;
use crate::forms::Form;
use crate::i18n::Language;
use crate::responses::{
    empty_response, html_response, redirect, stylesheet_response, ResultResp,
};
use crate::session::{token, SessionKey, UiSession};
use crate::share::{details_path, ShareLinks, DEEP_LINK_PARAM};
use crate::templates::dialogs::{self, SearchTab};
use crate::templates::pages::{details_page, home_page, DetailsVm};
use crate::templates::PageCtx;
use astra::Request;
use http::header::{COOKIE, SET_COOKIE};
use http::HeaderValue;
use tracing::{debug, info};

/// Per-request facts the handlers share.
struct Visit {
    key: SessionKey,
    htmx: bool,
}

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let presented = req
        .headers()
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(token::token_from_cookie_header)
        .map(str::to_string);
    let (key, issued) = app.sessions.resolve(presented.as_deref())?;

    let visit = Visit {
        key,
        htmx: req
            .headers()
            .get("HX-Request")
            .is_some_and(|v| v.as_bytes() == b"true"),
    };

    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    debug!(%method, %path, htmx = visit.htmx, "request");

    let mut resp = match (method.as_str(), path.as_str()) {
        ("GET", "/") => index(&req, app, &visit)?,
        ("GET", "/static/main.css") => stylesheet_response()?,

        ("POST", "/filters/category") => select_category(&Form::from_body(&mut req)?, app, &visit)?,
        ("POST", "/filters/clear") | ("POST", "/reset") => clear_filters(app, &visit)?,
        ("POST", "/search/classic") => classic_search(&Form::from_body(&mut req)?, app, &visit)?,
        ("POST", "/search/ai") => ai_search(&Form::from_body(&mut req)?, app, &visit)?,
        ("POST", "/language") => change_language(&Form::from_body(&mut req)?, app, &visit)?,
        ("POST", "/listings/reserve") => reserve(&Form::from_body(&mut req)?, app, &visit)?,
        ("POST", "/listings/save") => save(&Form::from_body(&mut req)?, app, &visit)?,
        ("POST", "/auth/login") => login(&Form::from_body(&mut req)?, app, &visit)?,
        ("POST", "/help") => help_request(&Form::from_body(&mut req)?, app, &visit)?,

        ("GET", "/dialogs/close") => empty_response()?,
        ("GET", dialog) if dialog.starts_with("/dialogs/") => {
            show_dialog(&dialog["/dialogs/".len()..], &Form::from_query(&req), app, &visit)?
        }

        _ => return Err(ServerError::NotFound),
    };

    if let Some(token) = issued {
        let cookie = HeaderValue::from_str(&token::set_cookie_value(&token))
            .map_err(|_| ServerError::InternalError)?;
        resp.headers_mut().append(SET_COOKIE, cookie);
    }

    Ok(resp)
}

fn page_ctx<'a>(session: &UiSession, property_id: Option<&'a str>) -> PageCtx<'a> {
    PageCtx {
        lang: session.language,
        logged_in: session.logged_in,
        property_id,
    }
}

/// Listing named by the `propertyId` field. Unknown ids are 404.
fn listing_field<'a>(form: &Form, app: &'a App) -> Result<&'a Listing, ServerError> {
    let id = form.required(DEEP_LINK_PARAM)?;
    app.catalog.get(id).ok_or(ServerError::NotFound)
}

/// Where a form returns to: the listing it was posted from, or home.
fn back_to(form: &Form, app: &App) -> String {
    form.text(DEEP_LINK_PARAM)
        .and_then(|id| app.catalog.get(id))
        .map(|listing| details_path(&listing.id))
        .unwrap_or_else(|| "/".to_string())
}

fn index(req: &Request, app: &App, visit: &Visit) -> ResultResp {
    let query = Form::from_query(req);
    let session = app.sessions.snapshot(visit.key)?;

    // Unknown ids fall through to the home view.
    if let Some(listing) = query.text(DEEP_LINK_PARAM).and_then(|id| app.catalog.get(id)) {
        let stay = Stay::sample();
        let vm = DetailsVm {
            listing,
            gallery: listing_gallery(&listing.id, &listing.image_url),
            stay,
            quote: StayQuote::new(listing, &stay),
            saved: session.saved.contains(&listing.id),
            reserved: session.reserved.contains(&listing.id),
        };
        return html_response(details_page(&page_ctx(&session, Some(&listing.id)), &vm));
    }

    let view = resolve(app.catalog.listings(), &session.selection);
    html_response(home_page(&page_ctx(&session, None), &session.selection, &view))
}

fn select_category(form: &Form, app: &App, visit: &Visit) -> ResultResp {
    let selection = match form.text("category") {
        None | Some("All") => FilterSelection::None,
        Some(label) => Category::from_label(label)
            .map(FilterSelection::Category)
            .ok_or_else(|| ServerError::BadRequest(format!("unknown category `{label}`")))?,
    };
    app.sessions.with_session(visit.key, |s| s.select(selection))?;
    redirect("/", visit.htmx)
}

fn clear_filters(app: &App, visit: &Visit) -> ResultResp {
    app.sessions
        .with_session(visit.key, |s| s.select(FilterSelection::None))?;
    redirect("/", visit.htmx)
}

fn classic_search(form: &Form, app: &App, visit: &Visit) -> ResultResp {
    // A region shortcut wins over the typed text; "I'm flexible" posts an empty region.
    let location_text = match form.get("region") {
        Some(region) => region.trim(),
        None => form.text("location").unwrap_or_default(),
    };
    let adults = form.count("adults", 1)?.max(1);
    let children = form.count("children", 0)?;
    // Validated, but pets do not take a guest slot.
    form.count("pets", 0)?;

    let criteria = ClassicCriteria {
        location_text: location_text.to_string(),
        guests: adults.saturating_add(children),
    };
    app.sessions
        .with_session(visit.key, |s| s.select(FilterSelection::Classic(criteria)))?;
    redirect("/", visit.htmx)
}

fn ai_search(form: &Form, app: &App, visit: &Visit) -> ResultResp {
    let Some(query) = form.text("query") else {
        return redirect("/", visit.htmx);
    };

    let ticket = app.sessions.begin_ai_search(visit.key)?;
    // The store is not locked while the provider is working.
    let matches = app.gateway.search(query, app.catalog.listings());
    app.sessions.finish_ai_search(visit.key, ticket, matches)?;

    redirect("/", visit.htmx)
}

fn change_language(form: &Form, app: &App, visit: &Visit) -> ResultResp {
    let code = form.required("language")?;
    let language = Language::from_code(code)
        .ok_or_else(|| ServerError::BadRequest(format!("unsupported language `{code}`")))?;
    app.sessions
        .with_session(visit.key, |s| s.language = language)?;
    redirect(&back_to(form, app), visit.htmx)
}

fn reserve(form: &Form, app: &App, visit: &Visit) -> ResultResp {
    let listing = listing_field(form, app)?;
    app.sessions.with_session(visit.key, |s| {
        s.reserved.insert(listing.id.clone());
    })?;

    let quote = StayQuote::new(listing, &Stay::sample());
    info!(listing = %listing.id, total = quote.total, "reservation simulated");
    redirect(&details_path(&listing.id), visit.htmx)
}

fn save(form: &Form, app: &App, visit: &Visit) -> ResultResp {
    let listing = listing_field(form, app)?;

    // Un-saving never needs a login, saving does.
    let needs_login = app.sessions.with_session(visit.key, |s| {
        if s.saved.contains(&listing.id) || s.logged_in {
            s.toggle_saved(&listing.id);
            false
        } else {
            true
        }
    })?;

    if needs_login {
        let session = app.sessions.snapshot(visit.key)?;
        return html_response(dialogs::auth_dialog(&page_ctx(&session, Some(&listing.id))));
    }
    redirect(&details_path(&listing.id), visit.htmx)
}

fn login(form: &Form, app: &App, visit: &Visit) -> ResultResp {
    form.required("phone")?;
    let country_code = form.text("country_code").unwrap_or("+1");
    let save_after = form.text(DEEP_LINK_PARAM).and_then(|id| app.catalog.get(id));

    app.sessions.with_session(visit.key, |s| {
        s.logged_in = true;
        if let Some(listing) = save_after {
            s.saved.insert(listing.id.clone());
        }
    })?;

    info!(country_code, saved = save_after.map(|l| l.id.as_str()), "simulated login");
    redirect(&back_to(form, app), visit.htmx)
}

fn help_request(form: &Form, app: &App, visit: &Visit) -> ResultResp {
    let name = form.required("name")?;
    form.required("phone")?;
    let message = form.required("message")?;
    let unit = form.text("unit");

    info!(name, unit, message_len = message.len(), "help request received");

    let session = app.sessions.snapshot(visit.key)?;
    html_response(dialogs::help_thanks(&page_ctx(&session, None)))
}

fn show_dialog(name: &str, query: &Form, app: &App, visit: &Visit) -> ResultResp {
    let session = app.sessions.snapshot(visit.key)?;
    let listing = query.text(DEEP_LINK_PARAM).and_then(|id| app.catalog.get(id));
    let ctx = page_ctx(&session, listing.map(|l| l.id.as_str()));

    let markup = match name {
        "search" => dialogs::search_dialog(
            &ctx,
            SearchTab::from_param(query.text("tab")),
            app.gateway.is_configured(),
        ),
        "auth" => dialogs::auth_dialog(&ctx),
        "help" => dialogs::help_dialog(&ctx),
        "language" => dialogs::language_dialog(&ctx),
        "share" => {
            let listing = listing_field(query, app)?;
            let links = ShareLinks::new(&app.public_url, listing);
            dialogs::share_dialog(&ctx, listing, &links)
        }
        "gallery" => {
            let listing = listing_field(query, app)?;
            let images = listing_gallery(&listing.id, &listing.image_url);
            dialogs::gallery_dialog(listing, &images)
        }
        _ => return Err(ServerError::NotFound),
    };
    html_response(markup)
}
