use std::io::{self, BufRead, Write};

use linkgen::model::{LinkDetail, LinkRow};
use linkgen::remote::LinksApi;
use linkgen::screens::{COLUMNS, DELETE_PROMPT, TableBody, row_cells};

use super::*;

pub(super) fn handle_links_command(session: &Session, command: LinksCommands) -> Result<()> {
    match command {
        LinksCommands::List { json } => {
            let mut dash = DashboardController::new();
            dash.load(&session.client);
            match dash.body() {
                TableBody::Error(msg) => anyhow::bail!(msg.to_string()),
                _ if json => println!(
                    "{}",
                    serde_json::to_string_pretty(dash.rows()).context("serialize links json")?
                ),
                TableBody::Placeholder(msg) => println!("{}", msg),
                TableBody::Rows(rows) => print_table(rows),
            }
        }
        LinksCommands::Show { id, json } => {
            let detail = session.client.get_link(id)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&detail).context("serialize link json")?
                );
            } else {
                print_detail(session, &detail);
            }
        }
        LinksCommands::Delete { id, yes } => {
            if !yes && !confirm(&format!("{} (id {}) [y/N] ", DELETE_PROMPT, id))? {
                println!("Cancelled");
                return Ok(());
            }
            let mut dash = DashboardController::new();
            dash.request_delete(id);
            if !dash.confirm_delete(&session.client) {
                anyhow::bail!(
                    dash.action_error()
                        .unwrap_or("Failed to delete link.")
                        .to_string()
                );
            }
            println!("Deleted {}", id);
        }
        LinksCommands::Open { id } => {
            let detail = session.client.get_link(id)?;
            let link = session.client.public_link(&detail.slug);
            println!("{}", link);
            if session.copies() {
                let mut clipboard = session.clipboard();
                if let Err(err) = clipboard.write_text(&link) {
                    eprintln!("note: copy to clipboard failed: {:#}", err);
                }
            }
        }
    }
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush().context("flush stdout")?;
    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("read confirmation")?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn print_table(rows: &[LinkRow]) {
    let header: Vec<String> = COLUMNS[..12].iter().map(|c| c.to_string()).collect();
    let cells: Vec<[String; 12]> = rows.iter().map(row_cells).collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (w, c) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(c.chars().count());
        }
    }

    print_line(&header, &widths);
    for row in &cells {
        print_line(row, &widths);
    }
}

fn print_line(cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(c, w)| format!("{:<width$}", c, width = *w))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", line.trim_end());
}

fn print_detail(session: &Session, detail: &LinkDetail) {
    println!("id: {}", detail.id);
    println!("type: {}", detail.kind);
    println!("slug: {}", detail.slug);
    println!("link: {}", session.client.public_link(&detail.slug));

    let opt = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
    if let Some(c) = &detail.contact {
        println!("first_name: {}", c.first_name);
        println!("last_name: {}", c.last_name);
        println!("phone: {}", c.phone);
        println!("email: {}", c.email);
        println!("company: {}", opt(&c.company));
        println!("title: {}", opt(&c.title));
        println!("website: {}", opt(&c.website));
        println!("notes: {}", opt(&c.notes));
    }
    if let Some(p) = &detail.pdf {
        println!("filename: {}", p.filename);
    }
    if let Some(u) = &detail.url {
        println!("url: {}", u.url);
        println!("title: {}", opt(&u.title));
    }
}
