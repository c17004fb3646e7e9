//! Built-in route catalog covering the legacy JSON wire protocol and W3C
//! paths.

use axum::http::Method;
use driverhub_protocols::names::*;

/// One predefined route.
#[derive(Debug, Clone)]
pub struct RouteDefinition {
    pub name: &'static str,
    pub method: Method,
    pub template: &'static str,
}

fn get(name: &'static str, template: &'static str) -> RouteDefinition {
    RouteDefinition {
        name,
        method: Method::GET,
        template,
    }
}

fn post(name: &'static str, template: &'static str) -> RouteDefinition {
    RouteDefinition {
        name,
        method: Method::POST,
        template,
    }
}

fn delete(name: &'static str, template: &'static str) -> RouteDefinition {
    RouteDefinition {
        name,
        method: Method::DELETE,
        template,
    }
}

/// Every route the command codec knows out of the box, in match order.
pub fn builtin_routes() -> Vec<RouteDefinition> {
    vec![
        get(STATUS, "/status"),
        get(GET_ALL_SESSIONS, "/sessions"),
        post(NEW_SESSION, "/session"),
        get(GET_CAPABILITIES, "/session/:sessionId"),
        delete(QUIT, "/session/:sessionId"),
        post(GET_SESSION_LOGS, "/logs"),
        post(GET_LOG, "/session/:sessionId/log"),
        get(GET_AVAILABLE_LOG_TYPES, "/session/:sessionId/log/types"),
        // Navigation
        get(GET_CURRENT_URL, "/session/:sessionId/url"),
        post(GET, "/session/:sessionId/url"),
        post(GO_BACK, "/session/:sessionId/back"),
        post(GO_FORWARD, "/session/:sessionId/forward"),
        post(REFRESH, "/session/:sessionId/refresh"),
        get(GET_TITLE, "/session/:sessionId/title"),
        get(GET_PAGE_SOURCE, "/session/:sessionId/source"),
        get(SCREENSHOT, "/session/:sessionId/screenshot"),
        post(UPLOAD_FILE, "/session/:sessionId/file"),
        // Windows and frames
        get(GET_CURRENT_WINDOW_HANDLE, "/session/:sessionId/window_handle"),
        get(GET_CURRENT_WINDOW_HANDLE_W3C, "/session/:sessionId/window"),
        get(GET_WINDOW_HANDLES, "/session/:sessionId/window_handles"),
        get(GET_WINDOW_HANDLES_W3C, "/session/:sessionId/window/handles"),
        post(SWITCH_TO_WINDOW, "/session/:sessionId/window"),
        delete(CLOSE, "/session/:sessionId/window"),
        post(SWITCH_TO_FRAME, "/session/:sessionId/frame"),
        post(SWITCH_TO_PARENT_FRAME, "/session/:sessionId/frame/parent"),
        get(GET_CURRENT_WINDOW_SIZE, "/session/:sessionId/window/rect"),
        post(SET_CURRENT_WINDOW_SIZE, "/session/:sessionId/window/rect"),
        post(MAXIMIZE_CURRENT_WINDOW, "/session/:sessionId/window/maximize"),
        post(FULLSCREEN_CURRENT_WINDOW, "/session/:sessionId/window/fullscreen"),
        get(GET_WINDOW_SIZE, "/session/:sessionId/window/:windowHandle/size"),
        post(SET_WINDOW_SIZE, "/session/:sessionId/window/:windowHandle/size"),
        get(GET_WINDOW_POSITION, "/session/:sessionId/window/:windowHandle/position"),
        post(SET_WINDOW_POSITION, "/session/:sessionId/window/:windowHandle/position"),
        post(MAXIMIZE_WINDOW, "/session/:sessionId/window/:windowHandle/maximize"),
        // Elements
        post(FIND_ELEMENT, "/session/:sessionId/element"),
        post(FIND_ELEMENTS, "/session/:sessionId/elements"),
        post(GET_ACTIVE_ELEMENT, "/session/:sessionId/element/active"),
        get(GET_ACTIVE_ELEMENT_W3C, "/session/:sessionId/element/active"),
        post(FIND_CHILD_ELEMENT, "/session/:sessionId/element/:id/element"),
        post(FIND_CHILD_ELEMENTS, "/session/:sessionId/element/:id/elements"),
        post(CLICK_ELEMENT, "/session/:sessionId/element/:id/click"),
        post(CLEAR_ELEMENT, "/session/:sessionId/element/:id/clear"),
        post(SUBMIT_ELEMENT, "/session/:sessionId/element/:id/submit"),
        post(SEND_KEYS_TO_ELEMENT, "/session/:sessionId/element/:id/value"),
        get(GET_ELEMENT_TEXT, "/session/:sessionId/element/:id/text"),
        get(GET_ELEMENT_TAG_NAME, "/session/:sessionId/element/:id/name"),
        get(IS_ELEMENT_SELECTED, "/session/:sessionId/element/:id/selected"),
        get(IS_ELEMENT_ENABLED, "/session/:sessionId/element/:id/enabled"),
        get(IS_ELEMENT_DISPLAYED, "/session/:sessionId/element/:id/displayed"),
        get(GET_ELEMENT_LOCATION, "/session/:sessionId/element/:id/location"),
        get(
            GET_ELEMENT_LOCATION_ONCE_SCROLLED_INTO_VIEW,
            "/session/:sessionId/element/:id/location_in_view",
        ),
        get(GET_ELEMENT_SIZE, "/session/:sessionId/element/:id/size"),
        get(GET_ELEMENT_RECT, "/session/:sessionId/element/:id/rect"),
        get(
            GET_ELEMENT_VALUE_OF_CSS_PROPERTY,
            "/session/:sessionId/element/:id/css/:propertyName",
        ),
        get(GET_ELEMENT_ATTRIBUTE, "/session/:sessionId/element/:id/attribute/:name"),
        get(GET_ELEMENT_PROPERTY, "/session/:sessionId/element/:id/property/:name"),
        get(ELEMENT_EQUALS, "/session/:sessionId/element/:id/equals/:other"),
        get(ELEMENT_SCREENSHOT, "/session/:sessionId/element/:id/screenshot"),
        // Cookies
        get(GET_ALL_COOKIES, "/session/:sessionId/cookie"),
        post(ADD_COOKIE, "/session/:sessionId/cookie"),
        delete(DELETE_ALL_COOKIES, "/session/:sessionId/cookie"),
        get(GET_COOKIE, "/session/:sessionId/cookie/:name"),
        delete(DELETE_COOKIE, "/session/:sessionId/cookie/:name"),
        // Timeouts
        post(SET_TIMEOUT, "/session/:sessionId/timeouts"),
        post(SET_SCRIPT_TIMEOUT, "/session/:sessionId/timeouts/async_script"),
        post(IMPLICITLY_WAIT, "/session/:sessionId/timeouts/implicit_wait"),
        // Alerts
        post(ACCEPT_ALERT, "/session/:sessionId/accept_alert"),
        post(DISMISS_ALERT, "/session/:sessionId/dismiss_alert"),
        get(GET_ALERT_TEXT, "/session/:sessionId/alert_text"),
        post(SET_ALERT_VALUE, "/session/:sessionId/alert_text"),
        post(ACCEPT_ALERT_W3C, "/session/:sessionId/alert/accept"),
        post(DISMISS_ALERT_W3C, "/session/:sessionId/alert/dismiss"),
        get(GET_ALERT_TEXT_W3C, "/session/:sessionId/alert/text"),
        post(SET_ALERT_VALUE_W3C, "/session/:sessionId/alert/text"),
        post(SET_ALERT_CREDENTIALS, "/session/:sessionId/alert/credentials"),
        // Scripts
        post(EXECUTE_SCRIPT, "/session/:sessionId/execute"),
        post(EXECUTE_ASYNC_SCRIPT, "/session/:sessionId/execute_async"),
        post(EXECUTE_SCRIPT_W3C, "/session/:sessionId/execute/sync"),
        post(EXECUTE_ASYNC_SCRIPT_W3C, "/session/:sessionId/execute/async"),
        // Legacy interactions
        post(MOVE_TO, "/session/:sessionId/moveto"),
        post(CLICK, "/session/:sessionId/click"),
        post(DOUBLE_CLICK, "/session/:sessionId/doubleclick"),
        post(MOUSE_DOWN, "/session/:sessionId/buttondown"),
        post(MOUSE_UP, "/session/:sessionId/buttonup"),
        post(SEND_KEYS_TO_ACTIVE_ELEMENT, "/session/:sessionId/keys"),
        // Touch
        post(TOUCH_SINGLE_TAP, "/session/:sessionId/touch/click"),
        post(TOUCH_DOWN, "/session/:sessionId/touch/down"),
        post(TOUCH_UP, "/session/:sessionId/touch/up"),
        post(TOUCH_MOVE, "/session/:sessionId/touch/move"),
        post(TOUCH_SCROLL, "/session/:sessionId/touch/scroll"),
        post(TOUCH_DOUBLE_TAP, "/session/:sessionId/touch/doubleclick"),
        post(TOUCH_LONG_PRESS, "/session/:sessionId/touch/longclick"),
        post(TOUCH_FLICK, "/session/:sessionId/touch/flick"),
        // Storage
        get(GET_LOCAL_STORAGE_KEYS, "/session/:sessionId/local_storage"),
        post(SET_LOCAL_STORAGE_ITEM, "/session/:sessionId/local_storage"),
        delete(CLEAR_LOCAL_STORAGE, "/session/:sessionId/local_storage"),
        get(GET_LOCAL_STORAGE_ITEM, "/session/:sessionId/local_storage/key/:key"),
        delete(REMOVE_LOCAL_STORAGE_ITEM, "/session/:sessionId/local_storage/key/:key"),
        get(GET_LOCAL_STORAGE_SIZE, "/session/:sessionId/local_storage/size"),
        get(GET_SESSION_STORAGE_KEYS, "/session/:sessionId/session_storage"),
        post(SET_SESSION_STORAGE_ITEM, "/session/:sessionId/session_storage"),
        delete(CLEAR_SESSION_STORAGE, "/session/:sessionId/session_storage"),
        get(GET_SESSION_STORAGE_ITEM, "/session/:sessionId/session_storage/key/:key"),
        delete(REMOVE_SESSION_STORAGE_ITEM, "/session/:sessionId/session_storage/key/:key"),
        get(GET_SESSION_STORAGE_SIZE, "/session/:sessionId/session_storage/size"),
        get(GET_APP_CACHE_STATUS, "/session/:sessionId/application_cache/status"),
        // Device state
        get(GET_LOCATION, "/session/:sessionId/location"),
        post(SET_LOCATION, "/session/:sessionId/location"),
        get(GET_SCREEN_ORIENTATION, "/session/:sessionId/orientation"),
        post(SET_SCREEN_ORIENTATION, "/session/:sessionId/orientation"),
        get(GET_NETWORK_CONNECTION, "/session/:sessionId/network_connection"),
        post(SET_NETWORK_CONNECTION, "/session/:sessionId/network_connection"),
        // IME
        get(IME_GET_AVAILABLE_ENGINES, "/session/:sessionId/ime/available_engines"),
        get(IME_GET_ACTIVE_ENGINE, "/session/:sessionId/ime/active_engine"),
        get(IME_IS_ACTIVATED, "/session/:sessionId/ime/activated"),
        post(IME_DEACTIVATE, "/session/:sessionId/ime/deactivate"),
        post(IME_ACTIVATE_ENGINE, "/session/:sessionId/ime/activate"),
        // Administration
        post(ADD_DRIVER_CONFIG, "/config/drivers"),
    ]
}
