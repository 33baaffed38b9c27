use super::App;
use tessera::gallery::{ItemId, TagFilter};

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    Tag(&'a str),
    All,
    Open(&'a str),
    Gallery(&'a str),
    Go(&'a str),
    Help,
    Unknown(String),
}

fn parse_command(input: &str) -> Option<Command<'_>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut words = trimmed.split_whitespace();
    let name = words.next()?;
    let command = name.to_ascii_lowercase();
    let args = trimmed[name.len()..].trim();

    Some(match command.as_str() {
        "q" | "quit" | "exit" => Command::Quit,
        "t" | "tag" => Command::Tag(args),
        "a" | "all" | "c" | "clear" => Command::All,
        "o" | "open" => Command::Open(args),
        "gal" | "gallery" => Command::Gallery(args),
        "go" | "g" => Command::Go(args),
        "h" | "help" => Command::Help,
        _ => Command::Unknown(command),
    })
}

impl App {
    pub fn enter_command_mode(&mut self) {
        self.ui.command_mode = true;
        self.ui.command_buffer.clear();
    }

    pub fn exit_command_mode(&mut self) {
        self.ui.command_mode = false;
        self.ui.command_buffer.clear();
    }

    pub fn command_input(&mut self, c: char) {
        self.ui.command_buffer.push(c);
    }

    pub fn command_backspace(&mut self) {
        self.ui.command_buffer.pop();
    }

    /// Execute the current command.
    pub fn execute_command(&mut self) {
        let cmd = self.ui.command_buffer.trim().to_string();
        self.ui.command_mode = false;
        self.ui.command_buffer.clear();

        let Some(command) = parse_command(&cmd) else {
            return;
        };

        match command {
            Command::Quit => {
                self.ui.should_quit = true;
            }

            Command::Tag("") => {
                let tags = self.instance().gallery.tags();
                self.ui.status_message = Some(if tags.is_empty() {
                    "No tags available".to_string()
                } else {
                    format!("Tags: {}", tags.iter().collect::<Vec<_>>().join(", "))
                });
            }

            Command::Tag(args) => {
                let filter = TagFilter::parse(args);
                if !self.instance().gallery.tags().admits(&filter) {
                    self.ui.status_message = Some(format!("Tag not found: {}", args));
                } else {
                    self.activate_tag(filter);
                }
            }

            Command::All => {
                self.clear_tag_filter();
            }

            Command::Open(args) => match args.parse::<usize>() {
                Ok(id) if self.open_item(ItemId(id)) => {}
                _ => {
                    self.ui.status_message = Some(format!("Cannot open item: {}", args));
                }
            },

            Command::Gallery("") => {
                let names: Vec<&str> = self
                    .instances
                    .iter()
                    .map(|i| i.gallery.name())
                    .collect();
                self.ui.status_message = Some(format!("Galleries: {}", names.join(", ")));
            }

            Command::Gallery(args) => {
                if !self.select_gallery(args) {
                    self.ui.status_message = Some(format!("Gallery not found: {}", args));
                }
            }

            Command::Go(args) => {
                if let Ok(n) = args.parse::<usize>() {
                    let instance = self.instance_mut();
                    if n > 0 && n <= instance.visible_ids().len() {
                        instance.cursor = n - 1;
                    }
                }
            }

            Command::Help => {
                self.ui.show_help = true;
            }

            Command::Unknown(command) => {
                self.ui.status_message = Some(format!("Unknown command: {}", command));
            }
        }
    }
}
