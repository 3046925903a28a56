//! # テスト用モックリポジトリ
//!
//! ユースケース・ハンドラのテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! challengehub-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! ID は 1 から順に採番し、一覧は ID 昇順で返す（PostgreSQL 実装と同じ並び）。

use std::sync::{
   Arc,
   Mutex,
   atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use challengehub_domain::{
   challenge::{Challenge, ChallengeId, NewChallenge},
   pagination::{Page, PageRequest},
   program::{NewProgram, Program, ProgramId},
   user::{User, UserId},
};

use crate::{
   error::InfraError,
   repository::{ChallengeRepository, ProgramRepository, UserRepository},
};

/// `Vec` から 1 ページ分を切り出す
fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Page<T> {
   let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
   let limit = usize::try_from(request.limit()).unwrap_or(usize::MAX);
   let slice = items.iter().skip(offset).take(limit).cloned().collect();
   Page::new(slice, items.len() as u64, request)
}

// ===== MockUserRepository =====

#[derive(Clone, Default)]
pub struct MockUserRepository {
   users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepository {
   pub fn new() -> Self {
      Self::default()
   }

   pub fn add_user(&self, user: User) {
      self.users.lock().unwrap().push(user);
   }
}

#[async_trait]
impl UserRepository for MockUserRepository {
   async fn find_by_id(&self, id: UserId) -> Result<Option<User>, InfraError> {
      Ok(self
         .users
         .lock()
         .unwrap()
         .iter()
         .find(|u| u.id() == id)
         .cloned())
   }

   async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, InfraError> {
      Ok(self
         .users
         .lock()
         .unwrap()
         .iter()
         .filter(|u| ids.contains(&u.id()))
         .cloned()
         .collect())
   }
}

// ===== MockProgramRepository =====

#[derive(Clone, Default)]
pub struct MockProgramRepository {
   programs: Arc<Mutex<Vec<Program>>>,
   next_id:  Arc<AtomicI64>,
}

impl MockProgramRepository {
   pub fn new() -> Self {
      Self::default()
   }

   /// 格納済みの件数
   pub fn len(&self) -> usize {
      self.programs.lock().unwrap().len()
   }

   pub fn is_empty(&self) -> bool {
      self.len() == 0
   }
}

#[async_trait]
impl ProgramRepository for MockProgramRepository {
   async fn find_page(&self, request: PageRequest) -> Result<Page<Program>, InfraError> {
      Ok(paginate(&self.programs.lock().unwrap(), request))
   }

   async fn find_by_id(&self, id: ProgramId) -> Result<Option<Program>, InfraError> {
      Ok(self
         .programs
         .lock()
         .unwrap()
         .iter()
         .find(|p| p.id() == id)
         .cloned())
   }

   async fn insert(&self, program: &NewProgram) -> Result<Program, InfraError> {
      let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
      let program = Program::from_new(ProgramId::new(id), program.clone());
      self.programs.lock().unwrap().push(program.clone());
      Ok(program)
   }

   async fn update(&self, program: &Program) -> Result<bool, InfraError> {
      let mut programs = self.programs.lock().unwrap();
      match programs.iter_mut().find(|p| p.id() == program.id()) {
         Some(slot) => {
            *slot = program.clone();
            Ok(true)
         }
         None => Ok(false),
      }
   }

   async fn delete(&self, id: ProgramId) -> Result<bool, InfraError> {
      let mut programs = self.programs.lock().unwrap();
      let before = programs.len();
      programs.retain(|p| p.id() != id);
      Ok(programs.len() < before)
   }
}

// ===== MockChallengeRepository =====

#[derive(Clone, Default)]
pub struct MockChallengeRepository {
   challenges: Arc<Mutex<Vec<Challenge>>>,
   next_id:    Arc<AtomicI64>,
}

impl MockChallengeRepository {
   pub fn new() -> Self {
      Self::default()
   }

   /// 格納済みの件数
   pub fn len(&self) -> usize {
      self.challenges.lock().unwrap().len()
   }

   pub fn is_empty(&self) -> bool {
      self.len() == 0
   }
}

#[async_trait]
impl ChallengeRepository for MockChallengeRepository {
   async fn find_page(&self, request: PageRequest) -> Result<Page<Challenge>, InfraError> {
      Ok(paginate(&self.challenges.lock().unwrap(), request))
   }

   async fn find_by_id(&self, id: ChallengeId) -> Result<Option<Challenge>, InfraError> {
      Ok(self
         .challenges
         .lock()
         .unwrap()
         .iter()
         .find(|c| c.id() == id)
         .cloned())
   }

   async fn insert(&self, challenge: &NewChallenge) -> Result<Challenge, InfraError> {
      let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
      let challenge = Challenge::from_new(ChallengeId::new(id), challenge.clone());
      self.challenges.lock().unwrap().push(challenge.clone());
      Ok(challenge)
   }

   async fn update(&self, challenge: &Challenge) -> Result<bool, InfraError> {
      let mut challenges = self.challenges.lock().unwrap();
      match challenges.iter_mut().find(|c| c.id() == challenge.id()) {
         Some(slot) => {
            *slot = challenge.clone();
            Ok(true)
         }
         None => Ok(false),
      }
   }

   async fn delete(&self, id: ChallengeId) -> Result<bool, InfraError> {
      let mut challenges = self.challenges.lock().unwrap();
      let before = challenges.len();
      challenges.retain(|c| c.id() != id);
      Ok(challenges.len() < before)
   }
}
