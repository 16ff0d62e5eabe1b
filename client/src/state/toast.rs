#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Visual flavor of a toast, mapped to a CSS modifier class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
            ToastKind::Warning => "toast--warning",
            ToastKind::Info => "toast--info",
        }
    }
}

/// One transient notification banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

/// The single toast stack shared by every controller on the page.
///
/// Toasts are independent: each gets a unique id, stacks freely with the
/// others, and is dismissed either by its own auto-dismiss timer or the
/// close button — whichever fires first wins and the second is a no-op.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Add a toast and return its id for the auto-dismiss timer.
    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            text: text.into(),
        });
        id
    }

    /// Remove one toast by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
