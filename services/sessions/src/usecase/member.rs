use huddle_domain::id::{SessionId, UserId};
use huddle_domain::pagination::{PageRequest, Sort};

use crate::domain::repository::MemberRepository;
use crate::domain::types::SessionMember;
use crate::error::SessionsServiceError;

// ── JoinSession ──────────────────────────────────────────────────────────────

pub struct JoinSessionUseCase<R: MemberRepository> {
    pub repo: R,
}

impl<R: MemberRepository> JoinSessionUseCase<R> {
    pub async fn execute(
        &self,
        session_id: SessionId,
        member_id: UserId,
    ) -> Result<SessionMember, SessionsServiceError> {
        self.repo.add(session_id, member_id).await
    }
}

// ── ListMembers ──────────────────────────────────────────────────────────────

pub struct ListMembersUseCase<R: MemberRepository> {
    pub repo: R,
}

impl<R: MemberRepository> ListMembersUseCase<R> {
    pub async fn execute(
        &self,
        session_id: SessionId,
        sort: Sort,
        page: PageRequest,
    ) -> Result<Vec<SessionMember>, SessionsServiceError> {
        self.repo.list_by_session(session_id, sort, page).await
    }
}

// ── LeaveSession ─────────────────────────────────────────────────────────────

pub struct LeaveSessionUseCase<R: MemberRepository> {
    pub repo: R,
}

impl<R: MemberRepository> LeaveSessionUseCase<R> {
    pub async fn execute(
        &self,
        session_id: SessionId,
        member_id: UserId,
    ) -> Result<(), SessionsServiceError> {
        if !self.repo.remove(session_id, member_id).await? {
            return Err(SessionsServiceError::MemberNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use huddle_domain::id::MemberId;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockMemberRepo {
        members: Mutex<Vec<SessionMember>>,
    }

    impl MemberRepository for MockMemberRepo {
        async fn add(
            &self,
            session_id: SessionId,
            member_id: UserId,
        ) -> Result<SessionMember, SessionsServiceError> {
            let mut members = self.members.lock().unwrap();
            if members
                .iter()
                .any(|m| m.session_id == session_id && m.member_id == member_id)
            {
                return Err(SessionsServiceError::AlreadyMember);
            }
            let now = Utc::now();
            let member = SessionMember {
                id: MemberId(members.len() as i64 + 1),
                session_id,
                member_id,
                created_at: now,
                updated_at: now,
            };
            members.push(member.clone());
            Ok(member)
        }
        async fn find_by_id(
            &self,
            id: MemberId,
        ) -> Result<Option<SessionMember>, SessionsServiceError> {
            Ok(self
                .members
                .lock()
                .unwrap()
                .iter()
                .find(|m| m.id == id)
                .cloned())
        }
        async fn list_by_session(
            &self,
            session_id: SessionId,
            sort: Sort,
            _page: PageRequest,
        ) -> Result<Vec<SessionMember>, SessionsServiceError> {
            let mut members: Vec<_> = self
                .members
                .lock()
                .unwrap()
                .iter()
                .filter(|m| m.session_id == session_id)
                .cloned()
                .collect();
            if sort == Sort::Desc {
                members.reverse();
            }
            Ok(members)
        }
        async fn remove(
            &self,
            session_id: SessionId,
            member_id: UserId,
        ) -> Result<bool, SessionsServiceError> {
            let mut members = self.members.lock().unwrap();
            let before = members.len();
            members.retain(|m| !(m.session_id == session_id && m.member_id == member_id));
            Ok(members.len() < before)
        }
    }

    #[tokio::test]
    async fn should_join_and_list_members() {
        let repo = MockMemberRepo::default();
        let join = JoinSessionUseCase { repo };
        join.execute(SessionId(1), UserId(10)).await.unwrap();
        join.execute(SessionId(1), UserId(11)).await.unwrap();
        join.execute(SessionId(2), UserId(10)).await.unwrap();

        let list = ListMembersUseCase { repo: join.repo };
        let members = list
            .execute(SessionId(1), Sort::Asc, PageRequest::default())
            .await
            .unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].member_id, UserId(10));

        let newest_first = list
            .execute(SessionId(1), Sort::Desc, PageRequest::default())
            .await
            .unwrap();
        assert_eq!(newest_first[0].member_id, UserId(11));
    }

    #[tokio::test]
    async fn should_reject_joining_twice() {
        let usecase = JoinSessionUseCase {
            repo: MockMemberRepo::default(),
        };
        usecase.execute(SessionId(1), UserId(10)).await.unwrap();
        let result = usecase.execute(SessionId(1), UserId(10)).await;
        assert!(matches!(result, Err(SessionsServiceError::AlreadyMember)));
    }

    #[tokio::test]
    async fn should_leave_session() {
        let join = JoinSessionUseCase {
            repo: MockMemberRepo::default(),
        };
        join.execute(SessionId(1), UserId(10)).await.unwrap();
        let leave = LeaveSessionUseCase { repo: join.repo };
        leave.execute(SessionId(1), UserId(10)).await.unwrap();
        let result = leave.execute(SessionId(1), UserId(10)).await;
        assert!(matches!(result, Err(SessionsServiceError::MemberNotFound)));
    }
}
