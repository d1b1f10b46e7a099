//! Lists every button under the taskbar element and marks the ones the
//! capture pattern matches. Takes the same flags as `mspy`.

#[cfg(windows)]
fn main() -> anyhow::Result<()> {
    use mspy_core::parser::parse_args;
    use mspy_core::taskbar::taskbar_button_names;
    use mspy_core::uia::Session;

    tracing_subscriber::fmt::init();

    let config = parse_args(std::env::args().skip(1)).into_config()?;
    println!("Taskbar: {:?}", config.taskbar_name);
    println!("Pattern: {:?}", config.ime_capture_pattern);

    let names = {
        let session = Session::open()?;
        let tree = session.automation()?;
        taskbar_button_names(&config, &tree)?
    };

    for (i, name) in names.iter().enumerate() {
        let capture = config
            .ime_capture_regex
            .as_ref()
            .and_then(|re| re.captures(name))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str());
        match capture {
            Some(mode) => println!("{:>3}  {}  => {}", i, name, mode),
            None => println!("{:>3}  {}", i, name),
        }
    }

    Ok(())
}

#[cfg(not(windows))]
fn main() {
    eprintln!("dump_taskbar needs the Windows UI Automation tree");
}
