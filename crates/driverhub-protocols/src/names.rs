//! Protocol command names.
//!
//! These are the keys handlers are registered under. Several commands exist in
//! both a legacy and a W3C form; the W3C form carries a `w3c` prefix.

pub const STATUS: &str = "status";
pub const GET_ALL_SESSIONS: &str = "getAllSessions";
pub const NEW_SESSION: &str = "newSession";
pub const GET_CAPABILITIES: &str = "getCapabilities";
pub const QUIT: &str = "quit";

pub const GET_CURRENT_WINDOW_HANDLE: &str = "getCurrentWindowHandle";
pub const GET_CURRENT_WINDOW_HANDLE_W3C: &str = "w3cGetCurrentWindowHandle";
pub const GET_WINDOW_HANDLES: &str = "getWindowHandles";
pub const GET_WINDOW_HANDLES_W3C: &str = "w3cGetWindowHandles";

pub const DISMISS_ALERT: &str = "dismissAlert";
pub const DISMISS_ALERT_W3C: &str = "w3cDismissAlert";
pub const ACCEPT_ALERT: &str = "acceptAlert";
pub const ACCEPT_ALERT_W3C: &str = "w3cAcceptAlert";
pub const GET_ALERT_TEXT: &str = "getAlertText";
pub const GET_ALERT_TEXT_W3C: &str = "w3cGetAlertText";
pub const SET_ALERT_VALUE: &str = "setAlertValue";
pub const SET_ALERT_VALUE_W3C: &str = "w3cSetAlertValue";
pub const SET_ALERT_CREDENTIALS: &str = "setAlertCredentials";

pub const GET: &str = "get";
pub const GET_CURRENT_URL: &str = "getCurrentUrl";
pub const GO_FORWARD: &str = "goForward";
pub const GO_BACK: &str = "goBack";
pub const REFRESH: &str = "refresh";

pub const EXECUTE_SCRIPT: &str = "executeScript";
pub const EXECUTE_ASYNC_SCRIPT: &str = "executeAsyncScript";
pub const EXECUTE_SCRIPT_W3C: &str = "w3cExecuteScript";
pub const EXECUTE_ASYNC_SCRIPT_W3C: &str = "w3cExecuteScriptAsync";

pub const GET_PAGE_SOURCE: &str = "getPageSource";
pub const SCREENSHOT: &str = "screenshot";
pub const ELEMENT_SCREENSHOT: &str = "elementScreenshot";
pub const GET_TITLE: &str = "getTitle";

pub const FIND_ELEMENT: &str = "findElement";
pub const FIND_ELEMENTS: &str = "findElements";
pub const GET_ACTIVE_ELEMENT: &str = "getActiveElement";
pub const GET_ACTIVE_ELEMENT_W3C: &str = "w3cGetActiveElement";
pub const FIND_CHILD_ELEMENT: &str = "findChildElement";
pub const FIND_CHILD_ELEMENTS: &str = "findChildElements";

pub const CLICK_ELEMENT: &str = "clickElement";
pub const GET_ELEMENT_TEXT: &str = "getElementText";
pub const SUBMIT_ELEMENT: &str = "submitElement";
pub const UPLOAD_FILE: &str = "uploadFile";
pub const SEND_KEYS_TO_ELEMENT: &str = "sendKeysToElement";
pub const GET_ELEMENT_TAG_NAME: &str = "getElementTagName";
pub const CLEAR_ELEMENT: &str = "clearElement";
pub const IS_ELEMENT_SELECTED: &str = "isElementSelected";
pub const IS_ELEMENT_ENABLED: &str = "isElementEnabled";
pub const IS_ELEMENT_DISPLAYED: &str = "isElementDisplayed";
pub const GET_ELEMENT_LOCATION: &str = "getElementLocation";
pub const GET_ELEMENT_LOCATION_ONCE_SCROLLED_INTO_VIEW: &str =
    "getElementLocationOnceScrolledIntoView";
pub const GET_ELEMENT_SIZE: &str = "getElementSize";
pub const GET_ELEMENT_VALUE_OF_CSS_PROPERTY: &str = "getElementValueOfCssProperty";
pub const GET_ELEMENT_RECT: &str = "getElementRect";
pub const GET_ELEMENT_ATTRIBUTE: &str = "getElementAttribute";
pub const GET_ELEMENT_PROPERTY: &str = "getElementProperty";
pub const ELEMENT_EQUALS: &str = "elementEquals";

pub const GET_ALL_COOKIES: &str = "getCookies";
pub const GET_COOKIE: &str = "getCookie";
pub const ADD_COOKIE: &str = "addCookie";
pub const DELETE_ALL_COOKIES: &str = "deleteAllCookies";
pub const DELETE_COOKIE: &str = "deleteCookie";

pub const SWITCH_TO_FRAME: &str = "switchToFrame";
pub const SWITCH_TO_PARENT_FRAME: &str = "switchToParentFrame";
pub const SWITCH_TO_WINDOW: &str = "switchToWindow";
pub const CLOSE: &str = "close";

pub const GET_WINDOW_SIZE: &str = "getWindowSize";
pub const GET_CURRENT_WINDOW_SIZE: &str = "getCurrentWindowSize";
pub const SET_WINDOW_SIZE: &str = "setWindowSize";
pub const SET_CURRENT_WINDOW_SIZE: &str = "setCurrentWindowSize";
pub const GET_WINDOW_POSITION: &str = "getWindowPosition";
pub const SET_WINDOW_POSITION: &str = "setWindowPosition";
pub const MAXIMIZE_WINDOW: &str = "maximizeWindow";
pub const MAXIMIZE_CURRENT_WINDOW: &str = "maximizeCurrentWindow";
pub const FULLSCREEN_CURRENT_WINDOW: &str = "fullscreenCurrentWindow";

pub const SET_TIMEOUT: &str = "setTimeout";
pub const IMPLICITLY_WAIT: &str = "implicitlyWait";
pub const SET_SCRIPT_TIMEOUT: &str = "setScriptTimeout";

pub const GET_LOCATION: &str = "getLocation";
pub const SET_LOCATION: &str = "setLocation";
pub const GET_APP_CACHE_STATUS: &str = "getStatus";

pub const GET_LOCAL_STORAGE_ITEM: &str = "getLocalStorageItem";
pub const REMOVE_LOCAL_STORAGE_ITEM: &str = "removeLocalStorageItem";
pub const GET_LOCAL_STORAGE_KEYS: &str = "getLocalStorageKeys";
pub const SET_LOCAL_STORAGE_ITEM: &str = "setLocalStorageItem";
pub const CLEAR_LOCAL_STORAGE: &str = "clearLocalStorage";
pub const GET_LOCAL_STORAGE_SIZE: &str = "getLocalStorageSize";

pub const GET_SESSION_STORAGE_ITEM: &str = "getSessionStorageItem";
pub const REMOVE_SESSION_STORAGE_ITEM: &str = "removeSessionStorageItem";
pub const GET_SESSION_STORAGE_KEYS: &str = "getSessionStorageKey";
pub const SET_SESSION_STORAGE_ITEM: &str = "setSessionStorageItem";
pub const CLEAR_SESSION_STORAGE: &str = "clearSessionStorage";
pub const GET_SESSION_STORAGE_SIZE: &str = "getSessionStorageSize";

pub const GET_SCREEN_ORIENTATION: &str = "getScreenOrientation";
pub const SET_SCREEN_ORIENTATION: &str = "setScreenOrientation";

pub const MOVE_TO: &str = "mouseMoveTo";
pub const CLICK: &str = "mouseClick";
pub const DOUBLE_CLICK: &str = "mouseDoubleClick";
pub const MOUSE_DOWN: &str = "mouseButtonDown";
pub const MOUSE_UP: &str = "mouseButtonUp";
pub const SEND_KEYS_TO_ACTIVE_ELEMENT: &str = "sendKeysToActiveElement";

pub const IME_GET_AVAILABLE_ENGINES: &str = "imeGetAvailableEngines";
pub const IME_GET_ACTIVE_ENGINE: &str = "imeGetActiveEngine";
pub const IME_IS_ACTIVATED: &str = "imeIsActivated";
pub const IME_DEACTIVATE: &str = "imeDeactivate";
pub const IME_ACTIVATE_ENGINE: &str = "imeActivateEngine";

pub const TOUCH_SINGLE_TAP: &str = "touchSingleTap";
pub const TOUCH_DOWN: &str = "touchDown";
pub const TOUCH_UP: &str = "touchUp";
pub const TOUCH_MOVE: &str = "touchMove";
pub const TOUCH_SCROLL: &str = "touchScroll";
pub const TOUCH_DOUBLE_TAP: &str = "touchDoubleTap";
pub const TOUCH_LONG_PRESS: &str = "touchLongPress";
pub const TOUCH_FLICK: &str = "touchFlick";

pub const GET_AVAILABLE_LOG_TYPES: &str = "getAvailableLogTypes";
pub const GET_LOG: &str = "getLog";
pub const GET_SESSION_LOGS: &str = "getSessionLogs";

pub const GET_NETWORK_CONNECTION: &str = "getNetworkConnection";
pub const SET_NETWORK_CONNECTION: &str = "setNetworkConnection";

/// Administrative command registering a driver profile at runtime.
pub const ADD_DRIVER_CONFIG: &str = "-driverhub-add-config";
