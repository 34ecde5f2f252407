/// Gives the process its own taskbar identity on Windows, so the window
/// groups under its own icon instead of the host executable's.
///
/// Does nothing on other platforms.
pub fn set_app_user_model_id(app_id: &str) {
    #[cfg(windows)]
    {
        use windows_sys::Win32::UI::Shell::SetCurrentProcessExplicitAppUserModelID;

        let wide: Vec<u16> = app_id.encode_utf16().chain(std::iter::once(0)).collect();
        let hr = unsafe { SetCurrentProcessExplicitAppUserModelID(wide.as_ptr()) };
        if hr < 0 {
            log::warn!("set app user model id fails: {hr:#x}");
        }
    }

    #[cfg(not(windows))]
    let _ = app_id;
}
