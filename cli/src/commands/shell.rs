//! The interactive menu.
//!
//! Prompts go through a [`Prompter`] so the whole conversation can be driven
//! from any reader. Results are reported through the terminal printer.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use colored::*;
use roster_common::config::Config;
use roster_common::student::validate::{validate_age, validate_gpa, validate_text};
use roster_common::student::{RecordUpdate, StudentId, StudentRecord};
use roster_common::{error, info, success, warn};
use roster_core::{FileRepository, OpenReport, RecordRepository, Session, SessionError};

use crate::commands::list;
use crate::rprint;
use crate::terminal::prompt::{PromptError, Prompter};
use crate::terminal::{format, print};

pub fn shell(cfg: &Config) -> anyhow::Result<()> {
    let repo = FileRepository::new(&cfg.data_file);
    let (session, report) = match Session::open(repo) {
        Ok(opened) => opened,
        Err(e) => {
            error!("{e:#}");
            error!("Fix or move the data file and start again. Nothing was written.");
            return Ok(());
        }
    };

    let stdin = io::stdin();
    let prompt = Prompter::new(stdin.lock(), io::stdout());
    let shell = Shell::new(session, prompt, cfg);
    shell.greet(&report);
    shell.run()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Search,
    Update,
    Delete,
    Exit,
}

impl MenuChoice {
    const ALL: [MenuChoice; 6] = [
        MenuChoice::Add,
        MenuChoice::List,
        MenuChoice::Search,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::Exit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add New Student",
            MenuChoice::List => "Display All Students",
            MenuChoice::Search => "Search Student",
            MenuChoice::Update => "Update Student",
            MenuChoice::Delete => "Delete Student",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::List),
            "3" => Ok(MenuChoice::Search),
            "4" => Ok(MenuChoice::Update),
            "5" => Ok(MenuChoice::Delete),
            "6" => Ok(MenuChoice::Exit),
            other => Err(format!("invalid menu choice: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UpdateChoice {
    Name,
    Age,
    Course,
    Gpa,
    All,
}

impl FromStr for UpdateChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(UpdateChoice::Name),
            "2" => Ok(UpdateChoice::Age),
            "3" => Ok(UpdateChoice::Course),
            "4" => Ok(UpdateChoice::Gpa),
            "5" => Ok(UpdateChoice::All),
            other => Err(format!("invalid update choice: {other}")),
        }
    }
}

const UPDATE_MENU: [&str; 5] = [
    "1. Name",
    "2. Age",
    "3. Course",
    "4. GPA",
    "5. All Information",
];

const AGE_HINT: &str = "Invalid age! Enter a whole number from 1 to 100.";
const GPA_HINT: &str = "Invalid GPA! Enter a value from 0.0 up to, but not including, 10.0.";

pub struct Shell<'a, R: RecordRepository, I, O> {
    session: Session<R>,
    prompt: Prompter<I, O>,
    cfg: &'a Config,
}

impl<'a, R: RecordRepository, I: BufRead, O: Write> Shell<'a, R, I, O> {
    pub fn new(session: Session<R>, prompt: Prompter<I, O>, cfg: &'a Config) -> Self {
        Self {
            session,
            prompt,
            cfg,
        }
    }

    pub fn greet(&self, report: &OpenReport) {
        let location = self.session.repository().location();

        if report.loaded == 0 {
            info!("No existing data found. Starting with an empty roster.");
            info!("Use 'Add New Student' to add your first student.");
        } else {
            success!("Loaded {} students from {location}", report.loaded);
        }

        if report.discarded_lines > 0 {
            warn!(
                "{} trailing line(s) in {location} do not form a complete record; they were ignored and will be dropped on the next save",
                report.discarded_lines
            );
        }

        if self.cfg.quiet == 0 {
            print::aligned_line("Data file", &location);
            print::aligned_line("Records", &report.loaded.to_string());
        }
    }

    /// Runs the menu until the user leaves or input ends, then saves and
    /// closes the session.
    pub fn run(mut self) -> anyhow::Result<()> {
        match self.menu_loop() {
            Ok(()) | Err(PromptError::Closed) => {}
            Err(PromptError::Io(e)) => error!("Console error: {e}"),
        }

        rprint!();
        success!("Thank you for using the student roster. Goodbye!");

        let Self { session, .. } = self;
        let location = session.repository().location();
        match session.close() {
            Ok(()) => success!("All data saved to {location}"),
            Err(e) => error!("{e}"),
        }
        print::end_of_program();
        Ok(())
    }

    fn menu_loop(&mut self) -> Result<(), PromptError> {
        loop {
            self.show_menu()?;
            let choice: MenuChoice = self.prompt.parsed(
                "Enter your choice",
                "Invalid choice! Please select 1-6.",
                |_| true,
            )?;

            match choice {
                MenuChoice::Add => self.add()?,
                MenuChoice::List => self.list(),
                MenuChoice::Search => self.search()?,
                MenuChoice::Update => self.update()?,
                MenuChoice::Delete => self.delete()?,
                MenuChoice::Exit => return Ok(()),
            }

            if !self.prompt.confirm("Show the menu again?")? {
                return Ok(());
            }
        }
    }

    fn show_menu(&mut self) -> Result<(), PromptError> {
        self.prompt.say("")?;
        self.prompt
            .say(&format!("{}", "MAIN MENU".bright_green().bold()))?;
        for choice in MenuChoice::ALL {
            let number = choice as u8 + 1;
            self.prompt
                .say(&format!("{}. {}", number.to_string().bright_cyan(), choice.label()))?;
        }
        Ok(())
    }

    fn add(&mut self) -> Result<(), PromptError> {
        print::header("add new student", self.cfg.quiet);

        let id = self.read_new_id()?;
        let name = self.read_text("Enter Name")?;
        let age = self.read_age("Enter Age")?;
        let course = self.read_text("Enter Course")?;
        let gpa = self.read_gpa("Enter GPA (0.0-9.99)")?;

        let record = match StudentRecord::new(id, name, age, course, gpa) {
            Ok(record) => record,
            Err(e) => {
                warn!("{e}");
                return Ok(());
            }
        };

        let id = record.id().clone();
        match self.session.add(record) {
            Ok(()) => {
                success!("Student added successfully! (ID: {id})");
                self.report_saved();
            }
            Err(e) => self.report_failure(e),
        }
        Ok(())
    }

    fn list(&self) {
        print::header("all student records", self.cfg.quiet);
        list::print_all(self.session.store(), self.cfg);
    }

    fn search(&mut self) -> Result<(), PromptError> {
        print::header("search student", self.cfg.quiet);

        let id = self.prompt.required("Enter Student ID")?;
        let store = self.session.store();
        match store.position(&id) {
            Some(idx) => {
                success!("Student found:");
                format::print_record(idx + 1, &store.list()[idx]);
            }
            None => warn!("Student with ID '{id}' not found!"),
        }
        Ok(())
    }

    fn update(&mut self) -> Result<(), PromptError> {
        print::header("update student", self.cfg.quiet);

        let id = self.prompt.required("Enter Student ID to update")?;
        let Some(idx) = self.session.store().position(&id) else {
            warn!("Student with ID '{id}' not found!");
            return Ok(());
        };

        print::print_status("Current details:");
        format::print_record(idx + 1, &self.session.store().list()[idx]);

        self.prompt.say("")?;
        self.prompt.say("What would you like to update?")?;
        for line in UPDATE_MENU {
            self.prompt.say(line)?;
        }
        let raw = self.prompt.line("Enter choice")?;
        let Ok(choice) = raw.trim().parse::<UpdateChoice>() else {
            warn!("Invalid choice! Nothing was changed.");
            return Ok(());
        };

        let update = match choice {
            UpdateChoice::Name => RecordUpdate::default().with_name(self.read_text("Enter new name")?),
            UpdateChoice::Age => RecordUpdate::default().with_age(self.read_age("Enter new age")?),
            UpdateChoice::Course => {
                RecordUpdate::default().with_course(self.read_text("Enter new course")?)
            }
            UpdateChoice::Gpa => RecordUpdate::default().with_gpa(self.read_gpa("Enter new GPA")?),
            UpdateChoice::All => {
                let name = self.read_text("Enter new name")?;
                let age = self.read_age("Enter new age")?;
                let course = self.read_text("Enter new course")?;
                let gpa = self.read_gpa("Enter new GPA")?;
                RecordUpdate::all(name, age, course, gpa)
            }
        };

        match self.session.update(&id, &update) {
            Ok(record) => {
                success!("Student record updated successfully!");
                format::print_record(idx + 1, &record);
                self.report_saved();
            }
            Err(e) => self.report_failure(e),
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<(), PromptError> {
        print::header("delete student", self.cfg.quiet);

        let id = self.prompt.required("Enter Student ID to delete")?;
        let Some(idx) = self.session.store().position(&id) else {
            warn!("Student with ID '{id}' not found!");
            return Ok(());
        };

        print::print_status("Student to be deleted:");
        format::print_record(idx + 1, &self.session.store().list()[idx]);

        if !self
            .prompt
            .confirm("Are you sure you want to delete this student?")?
        {
            print::print_status("Deletion cancelled.");
            return Ok(());
        }

        match self.session.delete(&id) {
            Ok(removed) => {
                success!("Student record {} deleted successfully!", removed.id());
                self.report_saved();
            }
            Err(e) => self.report_failure(e),
        }
        Ok(())
    }

    /// Loops until the ID is well formed and not already taken.
    fn read_new_id(&mut self) -> Result<StudentId, PromptError> {
        loop {
            let raw = self.prompt.required("Enter Student ID")?;
            match raw.parse::<StudentId>() {
                Err(_) => self.prompt.complain(
                    "ID must be alphanumeric and include at least one letter and one digit.",
                )?,
                Ok(id) if self.session.store().contains(id.as_str()) => self.prompt.complain(
                    &format!("A student with ID '{id}' already exists. Choose another ID."),
                )?,
                Ok(id) => return Ok(id),
            }
        }
    }

    fn read_text(&mut self, label: &str) -> Result<String, PromptError> {
        loop {
            let value = self.prompt.line(label)?.trim().to_string();
            if validate_text(&value) {
                return Ok(value);
            }
            self.prompt.complain("Line breaks are not allowed. Try again.")?;
        }
    }

    fn read_age(&mut self, label: &str) -> Result<u32, PromptError> {
        self.prompt.parsed(label, AGE_HINT, |age| validate_age(*age))
    }

    fn read_gpa(&mut self, label: &str) -> Result<f64, PromptError> {
        self.prompt.parsed(label, GPA_HINT, |gpa| validate_gpa(*gpa))
    }

    fn report_saved(&self) {
        success!("Data saved to {}", self.session.repository().location());
    }

    fn report_failure(&self, err: SessionError) {
        match err {
            SessionError::Store(e) => warn!("{e}"),
            SessionError::Unsaved(e) => {
                error!("{e}");
                warn!("The change is kept for this session but is not on disk yet.");
            }
        }
    }
}
