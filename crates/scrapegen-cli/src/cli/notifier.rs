//! Console notifications: default variant to stdout, destructive to stderr.

use scrapegen_core::notify::{Notification, Notifier, Variant};

pub struct ConsoleNotifier;

/// One-line rendering, e.g. `Success: Web scraper file generated successfully.`
pub fn render(notification: &Notification) -> String {
    format!("{}: {}", notification.title, notification.description)
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification.variant {
            Variant::Default => println!("{}", render(&notification)),
            Variant::Destructive => eprintln!("{}", render(&notification)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_joins_title_and_description() {
        assert_eq!(
            render(&Notification::success()),
            "Success: Web scraper file generated successfully."
        );
        assert_eq!(
            render(&Notification::failure("Received empty response from server")),
            "Error: Received empty response from server"
        );
    }
}
