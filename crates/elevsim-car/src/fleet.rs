//! The fixed-size car fleet: a dense `Vec<Car>` indexed by [`CarId`].
//!
//! At most 10 cars run in a single engine (§3's configuration range), so a
//! plain vector is the natural store — the corpus's SoA/indexed-storage
//! idiom generalized to this small, fixed cardinality rather than a
//! generic component map.

use elevsim_core::{CarId, Floor};

use crate::car::Car;
use crate::error::CarResult;

#[derive(Clone, Debug)]
pub struct CarFleet {
    cars: Vec<Car>,
}

impl CarFleet {
    /// Create `num_cars` cars, all idle at `start_floor`.
    pub fn new(num_cars: u32, capacity: u32, start_floor: Floor) -> CarResult<CarFleet> {
        let mut cars = Vec::with_capacity(num_cars as usize);
        for i in 0..num_cars {
            cars.push(Car::new(CarId(i), capacity, start_floor)?);
        }
        Ok(CarFleet { cars })
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    pub fn get(&self, id: CarId) -> Option<&Car> {
        self.cars.get(id.index())
    }

    /// The whole fleet as a dense slice, in ascending id order — what
    /// `Assigner::assign` consumes (§4.3).
    pub fn as_slice(&self) -> &[Car] {
        &self.cars
    }

    pub fn get_mut(&mut self, id: CarId) -> Option<&mut Car> {
        self.cars.get_mut(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Car> {
        self.cars.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Car> {
        self.cars.iter_mut()
    }

    /// Reset every car to idle at `start_floor`, dropping all passengers and
    /// stops (`reset()`, §4.7).
    pub fn reset(&mut self, start_floor: Floor) {
        for car in &mut self.cars {
            let capacity = car.capacity;
            let id = car.id;
            *car = Car::new(id, capacity, start_floor).expect("capacity was already validated");
        }
    }
}
