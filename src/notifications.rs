/// Cross-platform notification support
/// Currently only implements macOS notifications

#[cfg(target_os = "macos")]
use std::process::Command;

/// Celebrate a freshly created task. Fire-and-forget: failures are ignored.
pub fn celebrate_task_created(task_title: &str) {
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "🎉 {}" with title "Let's do Todo - Task Added""#,
            task_title.replace('"', "\\\"")
        );

        let _ = Command::new("osascript")
            .arg("-e")
            .arg(&script)
            .output();
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = task_title;
    }
}

/// Announce that a Pomodoro or tea break has run out
pub fn notify_timer_finished(break_mode: bool) {
    #[cfg(target_os = "macos")]
    {
        let message = if break_mode {
            "Tea break is over"
        } else {
            "Pomodoro finished - time for a break"
        };
        let script = format!(
            r#"display notification "⏰ {}" with title "Let's do Todo""#,
            message
        );

        let _ = Command::new("osascript")
            .arg("-e")
            .arg(&script)
            .output();
    }

    #[cfg(not(target_os = "macos"))]
    {
        let _ = break_mode;
    }
}
