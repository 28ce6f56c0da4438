use anyhow::Result;
use log::{info, warn};
use std::fs;
use std::sync::Arc;

use super::connection::CsvConnection;
use crate::domain::models::client::Client;
use crate::storage::traits::ClientStorage;

/// YAML-based client catalog repository.
#[derive(Clone)]
pub struct ClientRepository {
    connection: Arc<CsvConnection>,
}

impl ClientRepository {
    /// Create a new client repository.
    pub fn new(connection: Arc<CsvConnection>) -> Self {
        Self { connection }
    }

    fn read_clients(&self) -> Result<Vec<Client>> {
        let path = self.connection.clients_file_path();

        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let clients: Vec<Client> = serde_yaml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse client catalog: {}", e))?;
        Ok(clients)
    }

    fn write_clients(&self, clients: &[Client]) -> Result<()> {
        let path = self.connection.clients_file_path();
        let content = serde_yaml::to_string(clients)?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &path)?;

        Ok(())
    }
}

impl ClientStorage for ClientRepository {
    fn store_client(&self, client: &Client) -> Result<()> {
        let mut clients = self.read_clients()?;

        if clients.iter().any(|c| c.id == client.id) {
            return Err(anyhow::anyhow!("Client already exists: {}", client.id));
        }

        clients.push(client.clone());
        self.write_clients(&clients)?;

        info!("Stored client {} ({})", client.id, client.name);
        Ok(())
    }

    fn get_client(&self, client_id: &str) -> Result<Option<Client>> {
        let clients = self.read_clients()?;
        Ok(clients.into_iter().find(|c| c.id == client_id))
    }

    fn list_clients(&self) -> Result<Vec<Client>> {
        let mut clients = self.read_clients()?;
        clients.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(clients)
    }

    fn update_client(&self, client: &Client) -> Result<()> {
        let mut clients = self.read_clients()?;

        match clients.iter_mut().find(|c| c.id == client.id) {
            Some(stored) => {
                *stored = client.clone();
                self.write_clients(&clients)?;
                Ok(())
            }
            None => {
                warn!("Attempted to update a non-existent client: {}", client.id);
                Err(anyhow::anyhow!("Client not found for update: {}", client.id))
            }
        }
    }

    fn delete_client(&self, client_id: &str) -> Result<bool> {
        let mut clients = self.read_clients()?;
        let before = clients.len();

        clients.retain(|c| c.id != client_id);

        if clients.len() == before {
            return Ok(false);
        }

        self.write_clients(&clients)?;
        info!("Deleted client {}", client_id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_repo() -> (ClientRepository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = CsvConnection::new(temp_dir.path()).unwrap();
        let repo = ClientRepository::new(Arc::new(connection));
        (repo, temp_dir)
    }

    fn sample_client(id: &str, name: &str) -> Client {
        Client {
            id: id.to_string(),
            name: name.to_string(),
            bonus_points: 0,
        }
    }

    #[test]
    fn test_store_and_get_client() {
        let (repo, _temp_dir) = setup_test_repo();

        let client = sample_client("c-1", "Ana");
        repo.store_client(&client).expect("Failed to store client");

        assert_eq!(repo.get_client("c-1").unwrap(), Some(client));
        assert!(repo.get_client("c-2").unwrap().is_none());
    }

    #[test]
    fn test_store_duplicate_client_fails() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.store_client(&sample_client("c-1", "Ana")).unwrap();
        assert!(repo.store_client(&sample_client("c-1", "Ana B")).is_err());
    }

    #[test]
    fn test_list_clients_ordered_by_name() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.store_client(&sample_client("c-1", "Mara")).unwrap();
        repo.store_client(&sample_client("c-2", "Andrei")).unwrap();

        let names: Vec<String> = repo
            .list_clients()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Andrei", "Mara"]);
    }

    #[test]
    fn test_update_client_bonus_points() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.store_client(&sample_client("c-1", "Ana")).unwrap();

        let mut client = repo.get_client("c-1").unwrap().unwrap();
        client.bonus_points += 7;
        repo.update_client(&client).expect("Failed to update client");

        assert_eq!(repo.get_client("c-1").unwrap().unwrap().bonus_points, 7);
    }

    #[test]
    fn test_update_nonexistent_client_fails() {
        let (repo, _temp_dir) = setup_test_repo();
        assert!(repo.update_client(&sample_client("c-1", "Ana")).is_err());
    }

    #[test]
    fn test_delete_client() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.store_client(&sample_client("c-1", "Ana")).unwrap();
        assert!(repo.delete_client("c-1").unwrap());
        assert!(!repo.delete_client("c-1").unwrap());
        assert!(repo.list_clients().unwrap().is_empty());
    }
}
