// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    // Using a raw string literal for the multi-line banner
    let banner = r#"
 _   _ _   _  ____   ____       _                 _
| \ | | \ | |/ ___| / ___|  ___| |__   ___   ___ | |___
|  \| |  \| | |     \___ \ / __| '_ \ / _ \ / _ \| / __|
| |\  | |\  | |___   ___) | (__| | | | (_) | (_) | \__ \
|_| \_|_| \_|\____| |____/ \___|_| |_|\___/ \___/|_|___/


    NYC Schools Open Data Client
"#;
    println!("{}", banner);
}
