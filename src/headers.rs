pub(crate) struct RequestHeaders;
pub(crate) struct Attributes;

impl RequestHeaders {
    pub(crate) const HX_REQUEST: &'static str = "hx-request";
    pub(crate) const HX_BOOSTED: &'static str = "hx-boosted";
    pub(crate) const HX_CURRENT_URL: &'static str = "hx-current-url";
    pub(crate) const HX_HISTORY_RESTORE_REQUEST: &'static str = "hx-history-restore-request";
    pub(crate) const HX_PROMPT: &'static str = "hx-prompt";
    pub(crate) const HX_TARGET: &'static str = "hx-target";
    pub(crate) const HX_TRIGGER: &'static str = "hx-trigger";
    pub(crate) const HX_TRIGGER_NAME: &'static str = "hx-trigger-name";
    pub(crate) const HX_FRAGMENT: &'static str = "hx-fragment";

    /// Spelling written into the outgoing header mapping by the fragments extension.
    pub(crate) const HX_FRAGMENT_OUTGOING: &'static str = "HX-Fragment";
}

impl Attributes {
    pub(crate) const HX_FRAGMENT: &'static str = "hx-fragment";
}
