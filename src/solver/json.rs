#![allow(non_snake_case)]
use crate::{
    algebra::*,
    solver::{
        solve_linear_system, QrEigenSolver, SolverError, SolverSettings, SymmetricEigenSolver,
    },
};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::io::Write;
use std::{fs::File, io, io::Read};

/// Reading and writing of problems as JSON files
pub trait ProblemJSONReadWrite: Sized {
    fn save_to_file(&self, file: &mut File) -> Result<(), io::Error>;
    fn load_from_file(file: &mut File) -> Result<Self, io::Error>;
}

/// A linear system `A*x = b`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: Serialize + DeserializeOwned")]
pub struct LinearSystem<T: FloatT = f32> {
    pub A: Matrix<T>,
    pub b: Matrix<T>,
}

/// An eigenvalue problem together with the settings to solve it with
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "T: Serialize + DeserializeOwned")]
pub struct EigenProblem<T: FloatT = f32> {
    pub A: Matrix<T>,
    pub settings: SolverSettings<T>,
}

impl<T: FloatT> LinearSystem<T> {
    pub fn new(A: Matrix<T>, b: Matrix<T>) -> Self {
        Self { A, b }
    }

    /// Direct solve through an LU decomposition
    pub fn solve(&self) -> Result<Matrix<T>, SolverError> {
        solve_linear_system(&self.A, &self.b)
    }
}

impl<T: FloatT> EigenProblem<T> {
    pub fn new(A: Matrix<T>, settings: SolverSettings<T>) -> Self {
        Self { A, settings }
    }

    pub fn symmetric_solver(&self) -> Result<SymmetricEigenSolver<T>, SolverError> {
        SymmetricEigenSolver::new(&self.A, self.settings.clone())
    }

    pub fn qr_solver(&self) -> Result<QrEigenSolver<T>, SolverError> {
        QrEigenSolver::new(&self.A, self.settings.clone())
    }
}

fn invalid_data<E: std::error::Error + Send + Sync + 'static>(e: E) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, e)
}

fn write_json<S: Serialize>(data: &S, file: &mut File) -> Result<(), io::Error> {
    let json = serde_json::to_string(data)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

fn read_json<S: DeserializeOwned>(file: &mut File) -> Result<S, io::Error> {
    let mut buffer = String::new();
    file.read_to_string(&mut buffer)?;
    let data = serde_json::from_str(&buffer)?;
    Ok(data)
}

impl<T> ProblemJSONReadWrite for LinearSystem<T>
where
    T: FloatT + DeserializeOwned + Serialize,
{
    fn save_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        write_json(self, file)
    }

    fn load_from_file(file: &mut File) -> Result<Self, io::Error> {
        let system: LinearSystem<T> = read_json(file)?;

        // shapes in the file are not trusted
        system.A.validate().map_err(invalid_data)?;
        system.b.validate().map_err(invalid_data)?;
        if system.b.nrows() != system.A.nrows() {
            return Err(invalid_data(MatrixError::IncompatibleDimension));
        }
        Ok(system)
    }
}

impl<T> ProblemJSONReadWrite for EigenProblem<T>
where
    T: FloatT + DeserializeOwned + Serialize,
{
    fn save_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        write_json(self, file)
    }

    fn load_from_file(file: &mut File) -> Result<Self, io::Error> {
        let problem: EigenProblem<T> = read_json(file)?;

        problem.A.validate().map_err(invalid_data)?;
        problem.settings.validate().map_err(invalid_data)?;
        Ok(problem)
    }
}
