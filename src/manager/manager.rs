use std::cell::{
    RefCell, RefMut
};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;

use serde_json;

use super::managererror::ManagerError;
use super::namedobject::NamedJsonObject;


pub trait IManager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>>;

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        let map = self.map();
        map.get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }

    fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }

    fn from_reader(&self, file_path: &str) -> Result<(), ManagerError> {
        let file = File::open(file_path).map_err(ManagerError::IOError)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader).map_err(ManagerError::JsonParseError)?;
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> = ManagerError::from_json_or_json_parse_error(json_value)?;
            self.insert_obj_from_json_vec(&json_array)?;
        } else {
            self.insert_obj_from_json(json_value)?;
        }
        Ok(())
    }
}


pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
    get_obj_from_json: fn(&str, serde_json::Value) -> Result<V, ManagerError>
}


impl <V> Manager<V> where
    V: Clone {
    pub fn new(get_obj_from_json: fn(&str, serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager {map_cell: RefCell::new(HashMap::new()), get_obj_from_json}
    }

    pub fn len(&self) -> usize {
        self.map_cell.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map_cell.borrow().is_empty()
    }
}

impl <V> IManager<V> for Manager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let named_object: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
        let name = named_object.name();
        let v = (self.get_obj_from_json)(name, json_value)?;
        if self.map().insert(name.to_owned(), v).is_some() {
            log::warn!("'{}' defined more than once; the later definition is kept", name);
        }
        Ok(())
    }
}
