use sidedock_core::{ReconciledEntry, ReconciledView, RunningInventory};

pub struct AppTableFormatter {
    name_width: usize,
    class_width: usize,
    command_width: usize,
    windows_width: usize,
}

impl AppTableFormatter {
    pub fn new(view: &ReconciledView) -> Self {
        let name_width = view
            .iter()
            .map(|e| e.descriptor.name.chars().count())
            .max()
            .unwrap_or(16)
            .clamp(4, 40); // Between "Name" header min and reasonable terminal width max

        let class_width = view
            .iter()
            .map(|e| e.descriptor.window_class.chars().count())
            .max()
            .unwrap_or(5)
            .clamp(5, 30);

        Self {
            name_width,
            class_width,
            command_width: 30,
            windows_width: 7,
        }
    }

    pub fn print_table(&self, view: &ReconciledView) {
        println!("{}", self.border('┌', '┬', '┐'));
        println!(
            "{}",
            self.row(["Name", "Class", "Command", "Windows"].map(String::from))
        );
        println!("{}", self.border('├', '┼', '┤'));
        for entry in view.iter() {
            println!("{}", self.row(self.cells(entry)));
        }
        println!("{}", self.border('└', '┴', '┘'));
    }

    fn cells(&self, entry: &ReconciledEntry) -> [String; 4] {
        let windows = if entry.is_running() {
            entry.instances.len().to_string()
        } else {
            "-".to_string()
        };
        [
            entry.descriptor.name.clone(),
            entry.descriptor.window_class.clone(),
            entry.descriptor.exec_command.clone(),
            windows,
        ]
    }

    fn widths(&self) -> [usize; 4] {
        [
            self.name_width,
            self.class_width,
            self.command_width,
            self.windows_width,
        ]
    }

    fn row(&self, cells: [String; 4]) -> String {
        format_row(&cells, &self.widths())
    }

    fn border(&self, left: char, mid: char, right: char) -> String {
        format_border(&self.widths(), left, mid, right)
    }
}

pub struct WindowTableFormatter {
    class_width: usize,
    id_width: usize,
    title_width: usize,
}

impl WindowTableFormatter {
    pub fn new(inventory: &RunningInventory) -> Self {
        let class_width = inventory
            .iter()
            .map(|(class, _)| class.chars().count())
            .max()
            .unwrap_or(5)
            .clamp(5, 30);

        Self {
            class_width,
            id_width: 10,
            title_width: 50,
        }
    }

    pub fn print_table(&self, inventory: &RunningInventory) {
        let widths = [self.class_width, self.id_width, self.title_width];

        println!("{}", format_border(&widths, '┌', '┬', '┐'));
        println!(
            "{}",
            format_row(&["Class", "Window ID", "Title"].map(String::from), &widths)
        );
        println!("{}", format_border(&widths, '├', '┼', '┤'));
        for (class, instances) in inventory.iter() {
            for instance in instances {
                let cells = [
                    class.to_string(),
                    instance.window_id.clone(),
                    instance.title.clone(),
                ];
                println!("{}", format_row(&cells, &widths));
            }
        }
        println!("{}", format_border(&widths, '└', '┴', '┘'));
    }
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let body: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| truncate(cell, *width))
        .collect();
    format!("│ {} │", body.join(" │ "))
}

fn format_border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{left}{}{right}", segments.join(&mid.to_string()))
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
