use crate::{
    db::notes::Notes,
    libs::{config::Config, messages::Message, note::Note, view::View},
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct NoteArgs {
    #[command(subcommand)]
    command: Option<NoteCommand>,
}

#[derive(Debug, Subcommand)]
enum NoteCommand {
    /// Create a new note
    Add {
        /// Note title
        title: Option<String>,
        /// Note body
        #[arg(short, long)]
        content: Option<String>,
    },
    /// List all notes
    List,
    /// Print a single note
    Show {
        /// Note id
        id: String,
    },
    /// Edit a note
    Edit {
        /// Note id
        id: String,
    },
    /// Delete a note
    Delete {
        /// Note id
        id: String,
    },
}

pub fn cmd(args: NoteArgs) -> Result<()> {
    match args.command {
        Some(NoteCommand::Add { title, content }) => handle_add(title, content),
        Some(NoteCommand::List) | None => handle_list(),
        Some(NoteCommand::Show { id }) => handle_show(id),
        Some(NoteCommand::Edit { id }) => handle_edit(id),
        Some(NoteCommand::Delete { id }) => handle_delete(id),
    }
}

fn handle_add(title: Option<String>, content: Option<String>) -> Result<()> {
    let title: String = match title {
        Some(title) => title,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptNoteTitle.to_string())
            .allow_empty(true)
            .interact_text()?,
    };
    let content: String = match content {
        Some(content) => content,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptNoteContent.to_string())
            .allow_empty(true)
            .interact_text()?,
    };

    if Note::is_blank(&title, &content) {
        msg_error!(Message::NoteEmpty);
        return Ok(());
    }

    let note = Notes::new()?.create(&title, &content)?;
    msg_success!(Message::NoteCreated(note.title));
    Ok(())
}

fn handle_list() -> Result<()> {
    let notes = Notes::new()?.fetch();
    if notes.is_empty() {
        msg_info!(Message::NoNotesFound);
        return Ok(());
    }

    msg_print!(Message::NotesHeader, true);
    View::notes(&notes, Config::read_or_default().theme_palette());
    Ok(())
}

fn handle_show(id: String) -> Result<()> {
    let note = match Notes::new()?.get(&id) {
        Some(note) => note,
        None => {
            msg_error!(Message::NoteNotFound(id));
            return Ok(());
        }
    };

    View::note(&note, Config::read_or_default().theme_palette());
    Ok(())
}

fn handle_edit(id: String) -> Result<()> {
    let notes_db = Notes::new()?;
    let note = match notes_db.get(&id) {
        Some(note) => note,
        None => {
            msg_error!(Message::NoteNotFound(id));
            return Ok(());
        }
    };

    let new_title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptNoteTitle.to_string())
        .default(note.title.clone())
        .interact_text()?;
    let new_content: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptNoteContent.to_string())
        .default(note.content.clone())
        .allow_empty(true)
        .interact_text()?;

    let updated = notes_db.update(&note.id, &new_title, &new_content)?;
    msg_success!(Message::NoteUpdated(updated.title));
    Ok(())
}

fn handle_delete(id: String) -> Result<()> {
    let notes_db = Notes::new()?;
    let note = match notes_db.get(&id) {
        Some(note) => note,
        None => {
            msg_error!(Message::NoteNotFound(id));
            return Ok(());
        }
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteNote(note.title.clone()).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    notes_db.delete(&note.id)?;
    msg_success!(Message::NoteDeleted);
    Ok(())
}
