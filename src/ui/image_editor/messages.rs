// SPDX-License-Identifier: MPL-2.0
//! Editor message/event types re-exported by the facade.

/// Toolbar-specific messages.
#[derive(Debug, Clone)]
pub enum ToolbarMessage {
    Back,
}

/// Sidebar control messages.
#[derive(Debug, Clone)]
pub enum SidebarMessage {
    RotateLeft,
    RotateRight,
    FlipHorizontal,
    FlipVertical,
    ZoomIn,
    ZoomOut,
    /// Brightness slider changed (percent, 100 is neutral)
    BrightnessChanged(i32),
    /// Contrast slider changed (percent, 100 is neutral)
    ContrastChanged(i32),
    Reset,
    Save,
    SaveAs,
}

/// Messages emitted directly by the editor widgets.
#[derive(Debug, Clone)]
pub enum Message {
    Toolbar(ToolbarMessage),
    Sidebar(SidebarMessage),
}

impl From<ToolbarMessage> for Message {
    fn from(message: ToolbarMessage) -> Self {
        Message::Toolbar(message)
    }
}

impl From<SidebarMessage> for Message {
    fn from(message: SidebarMessage) -> Self {
        Message::Sidebar(message)
    }
}

/// Events propagated to the parent application for side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Request to leave the editor and return to the upload screen
    Exit,
    /// Request to write the export into the downloads directory
    SaveRequested,
    /// Request to open the native save dialog
    SaveAsRequested,
}
