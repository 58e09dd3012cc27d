use std::io::{BufRead, Write};
use std::path::Path;
use std::str::FromStr;

use anyhow::Result;
use tracing::debug;

use domain::{Device, DeviceId, DeviceKind, DeviceStatus, ReportKind};

use crate::Services;

pub const MENU: &str = "\nMenu:
1. Add Device
2. Remove Device
3. Update Device Status
4. Search Device by ID
5. Search Device by Name
6. List All Devices
7. Sort Devices by Name
8. Sort Devices by Status
9. Generate Status Report
10. Generate Health Report
11. Export Report
0. Exit";

/// One entry of the numbered menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Add,
    Remove,
    UpdateStatus,
    FindById,
    FindByName,
    List,
    SortByName,
    SortByStatus,
    StatusReport,
    HealthReport,
    Export,
    Exit,
}

impl FromStr for MenuCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Add),
            "2" => Ok(Self::Remove),
            "3" => Ok(Self::UpdateStatus),
            "4" => Ok(Self::FindById),
            "5" => Ok(Self::FindByName),
            "6" => Ok(Self::List),
            "7" => Ok(Self::SortByName),
            "8" => Ok(Self::SortByStatus),
            "9" => Ok(Self::StatusReport),
            "10" => Ok(Self::HealthReport),
            "11" => Ok(Self::Export),
            "0" => Ok(Self::Exit),
            other => Err(other.to_string()),
        }
    }
}

/// Interactive menu loop. Each command reads its fields, makes one
/// registry or report call and prints the outcome.
pub struct Shell<R, W> {
    services: Services,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(services: Services, input: R, output: W) -> Self {
        Self {
            services,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `0` is chosen or input is exhausted.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };

            match choice.parse::<MenuCommand>() {
                Ok(MenuCommand::Exit) => break,
                Ok(command) => {
                    debug!(?command, "Running menu command");
                    self.execute(command)?;
                }
                Err(_) => writeln!(self.output, "Invalid option. Please try again.")?,
            }
        }

        self.services.log.log("Application exited.");
        Ok(())
    }

    fn execute(&mut self, command: MenuCommand) -> Result<()> {
        match command {
            MenuCommand::Add => self.add_device(),
            MenuCommand::Remove => self.remove_device(),
            MenuCommand::UpdateStatus => self.update_status(),
            MenuCommand::FindById => self.find_by_id(),
            MenuCommand::FindByName => self.find_by_name(),
            MenuCommand::List => {
                let devices = self.services.registry.list_all();
                self.print_devices(&devices)
            }
            MenuCommand::SortByName => {
                self.services.registry.sort_by_name();
                writeln!(self.output, "Devices sorted by name.")?;
                Ok(())
            }
            MenuCommand::SortByStatus => {
                self.services.registry.sort_by_status();
                writeln!(self.output, "Devices sorted by status.")?;
                Ok(())
            }
            MenuCommand::StatusReport => self.print_report(ReportKind::Status),
            MenuCommand::HealthReport => self.print_report(ReportKind::Health),
            MenuCommand::Export => self.export_report(),
            MenuCommand::Exit => Ok(()),
        }
    }

    fn add_device(&mut self) -> Result<()> {
        let id = self.prompt("Enter Device ID: ")?.unwrap_or_default();
        let name = self.prompt("Enter Device Name: ")?.unwrap_or_default();
        let ip = self.prompt("Enter IP Address: ")?.unwrap_or_default();
        let kind_choice = self
            .prompt("Enter Device Type (1: Generic, 2: TemperatureSensor, 3: MotionSensor): ")?
            .unwrap_or_default();

        let kind = match kind_choice.parse::<DeviceKind>() {
            Ok(kind) => kind,
            Err(_) => {
                writeln!(self.output, "Invalid type. Creating generic device.")?;
                DeviceKind::Generic
            }
        };

        let id = match DeviceId::new(id) {
            Ok(id) => id,
            Err(e) => {
                writeln!(self.output, "Failed to add device. {}", e)?;
                return Ok(());
            }
        };

        let device = Device::new(id, name, ip).with_kind(kind);
        if self.services.registry.add(device) {
            writeln!(self.output, "Device added successfully.")?;
        } else {
            writeln!(
                self.output,
                "Failed to add device. Device ID may already exist."
            )?;
        }
        Ok(())
    }

    fn remove_device(&mut self) -> Result<()> {
        let id = self
            .prompt("Enter Device ID to remove: ")?
            .unwrap_or_default();
        if self.services.registry.remove(&id) {
            writeln!(self.output, "Device removed successfully.")?;
        } else {
            writeln!(self.output, "Device not found.")?;
        }
        Ok(())
    }

    fn update_status(&mut self) -> Result<()> {
        let id = self.prompt("Enter Device ID: ")?.unwrap_or_default();
        let status_choice = self
            .prompt("Enter new status (0: Online, 1: Offline, 2: Maintenance): ")?
            .unwrap_or_default();

        let Ok(status) = status_choice.parse::<DeviceStatus>() else {
            writeln!(self.output, "Invalid status.")?;
            return Ok(());
        };

        if self.services.registry.update_status(&id, status) {
            writeln!(self.output, "Device status updated successfully.")?;
        } else {
            writeln!(self.output, "Device not found.")?;
        }
        Ok(())
    }

    fn find_by_id(&mut self) -> Result<()> {
        let id = self.prompt("Enter Device ID: ")?.unwrap_or_default();
        match self.services.registry.find_by_id(&id) {
            Some(device) => writeln!(self.output, "{}", device)?,
            None => writeln!(self.output, "Device not found.")?,
        }
        Ok(())
    }

    fn find_by_name(&mut self) -> Result<()> {
        let name = self.prompt("Enter Device Name: ")?.unwrap_or_default();
        let devices = self.services.registry.find_by_name(&name);
        self.print_devices(&devices)
    }

    fn print_devices(&mut self, devices: &[Device]) -> Result<()> {
        if devices.is_empty() {
            writeln!(self.output, "No devices found.")?;
        }
        for device in devices {
            writeln!(self.output, "{}", device)?;
        }
        Ok(())
    }

    fn print_report(&mut self, kind: ReportKind) -> Result<()> {
        self.services.reports.set_strategy(kind);
        let devices = self.services.registry.list_all();
        let report = self.services.reports.generate(&devices);
        writeln!(self.output, "{}", report)?;
        Ok(())
    }

    fn export_report(&mut self) -> Result<()> {
        let kind_choice = self
            .prompt("Enter report type (1: Status, 2: Health): ")?
            .unwrap_or_default();
        let path = self.prompt("Enter file path: ")?.unwrap_or_default();

        let Ok(kind) = kind_choice.parse::<ReportKind>() else {
            writeln!(self.output, "Invalid type.")?;
            return Ok(());
        };

        self.services.reports.set_strategy(kind);
        let devices = self.services.registry.list_all();
        if self.services.reports.export(&devices, Path::new(&path)) {
            writeln!(self.output, "Report exported.")?;
        } else {
            writeln!(self.output, "Failed to export report.")?;
        }
        Ok(())
    }

    /// Prints `label` and reads one trimmed line; `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
